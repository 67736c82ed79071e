//! End-to-end runs of the `gramsim` binary. The gramtools backend is stood in
//! for by `/bin/sh`, which reads a script named `simulate` from the working
//! directory and so receives exactly the arguments that follow the
//! subcommand token.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::TempDir;

const FAKE_BACKEND: &str = r#"printf '%s\n' "$@" > args.txt
echo "sampled paths for $6"
echo "backend complaint" >&2
exit ${FAKE_EXIT:-0}
"#;

fn workdir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("simulate"), FAKE_BACKEND).unwrap();
    dir
}

fn gramsim(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gramsim").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("GRAMSIM_GRAMTOOLS_EXEC")
        .args(["--gramtools-exec", "/bin/sh"]);
    cmd
}

fn recorded_args(dir: &Path) -> Vec<String> {
    fs::read_to_string(dir.join("args.txt"))
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn defaults_forwarded_to_backend() {
    let dir = workdir();
    gramsim(dir.path())
        .args(["simulate", "--prg", "graph.prg"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Start process: simulate"))
        .stderr(predicate::str::contains("End process: simulate"));

    assert_eq!(
        recorded_args(dir.path()),
        ["--prg", "graph.prg", "--n", "100", "--sample_id", "sim", "--o", ".", "--seed", "0"]
    );
}

#[test]
fn seed_and_debug_forwarded() {
    let dir = workdir();
    gramsim(dir.path())
        .args(["--debug", "simulate", "--prg", "graph.prg", "--seed", "42"])
        .args(["--sample_id", "pf", "-o", "out", "-n", "12"])
        .assert()
        .success()
        // backend output is only echoed at debug level on success
        .stderr(predicate::str::contains("sampled paths for pf"));

    assert_eq!(
        recorded_args(dir.path()),
        [
            "--prg", "graph.prg", "--n", "12", "--sample_id", "pf", "--o", "out", "--seed", "42",
            "--debug"
        ]
    );
}

#[test]
fn negative_seed_forwarded_verbatim() {
    let dir = workdir();
    gramsim(dir.path())
        .args(["simulate", "--prg", "graph.prg", "--seed", "-5"])
        .assert()
        .success();
    assert!(recorded_args(dir.path()).ends_with(&["--seed".to_string(), "-5".to_string()]));
}

#[test]
fn backend_launched_exactly_once() {
    let dir = tempfile::tempdir().unwrap();
    let gram = dir.path().join("gram");
    fs::write(&gram, "#!/bin/sh\necho \"$1\" >> calls.txt\n").unwrap();
    fs::set_permissions(&gram, fs::Permissions::from_mode(0o755)).unwrap();

    for extra in [&[][..], &["--debug"][..]] {
        let _ = fs::remove_file(dir.path().join("calls.txt"));
        Command::cargo_bin("gramsim")
            .unwrap()
            .current_dir(dir.path())
            .env_remove("RUST_LOG")
            .args(["simulate", "--prg", "graph.prg", "--gramtools-exec"])
            .arg(&gram)
            .args(extra)
            .assert()
            .success();
        assert_eq!(
            fs::read_to_string(dir.path().join("calls.txt")).unwrap(),
            "simulate\n",
            "extra args: {extra:?}"
        );
    }
}

#[test]
fn backend_output_logged_verbatim() {
    let dir = workdir();
    gramsim(dir.path())
        .env("FAKE_EXIT", "1")
        .args(["simulate", "--prg", "graph.prg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[sh]").not())
        .stderr(predicate::str::is_match(r"(?m)ERROR\s*\] backend complaint$").unwrap());
}

#[test]
fn backend_failure_exits_one_with_output_logged() {
    let dir = workdir();
    gramsim(dir.path())
        .env("FAKE_EXIT", "3")
        .args(["simulate", "--prg", "graph.prg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sampled paths for sim"))
        .stderr(predicate::str::contains("backend complaint"))
        .stderr(predicate::str::contains("End process: simulate").not());
}

#[test]
fn invalid_path_count_never_spawns() {
    let dir = workdir();
    gramsim(dir.path())
        .args(["simulate", "--prg", "graph.prg", "-n", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("max_num_paths"));
    assert!(!dir.path().join("args.txt").exists());
}

#[test]
fn non_integer_seed_is_usage_error() {
    let dir = workdir();
    gramsim(dir.path())
        .args(["simulate", "--prg", "graph.prg", "--seed", "abc"])
        .assert()
        .code(2);
    assert!(!dir.path().join("args.txt").exists());
}

#[test]
fn missing_prg_is_usage_error() {
    let dir = workdir();
    gramsim(dir.path())
        .arg("simulate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--prg"));
}

#[test]
fn unlaunchable_backend_exits_one() {
    let dir = workdir();
    // exists, but is not executable
    let not_exec = dir.path().join("simulate");
    Command::cargo_bin("gramsim")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .args(["simulate", "--prg", "graph.prg", "--gramtools-exec"])
        .arg(&not_exec)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to launch"));
}

#[test]
fn missing_backend_is_config_error() {
    let dir = workdir();
    Command::cargo_bin("gramsim")
        .unwrap()
        .current_dir(dir.path())
        .args(["simulate", "--prg", "graph.prg"])
        .args(["--gramtools-exec", "/definitely/not/here/gram"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("gramtools backend not found"));
}

#[test]
fn syscheck_reports_backend() {
    let dir = workdir();
    gramsim(dir.path())
        .arg("syscheck")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"gramsim_version\""))
        .stdout(predicate::str::contains("/bin/sh"));
}
