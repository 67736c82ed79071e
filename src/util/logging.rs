/// Initialize env_logger once; later calls are no-ops.
///
/// `RUST_LOG` wins when set. Otherwise gramsim logs at info, or debug with
/// `--debug`.
pub fn init_logging(debug: bool) {
    let default_filter = if debug { "gramsim=debug" } else { "gramsim=info" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .format_module_path(false)
        .try_init();
}

/// Emit a child's captured output verbatim at `level`, one record per line.
pub fn log_child_output(level: log::Level, text: &str) {
    for line in text.lines() {
        log::log!(level, "{line}");
    }
}
