use assert_cmd::Command;
use assert_fs::TempDir;
use predicates::prelude::*;

/// Build a `benchrun` command running in its own temp dir, so CSV artifacts
/// land somewhere disposable and colors are off for stable assertions.
fn benchrun_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("benchrun").unwrap();
    cmd.current_dir(dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

// ---- Successful runs ----

#[test]
fn five_runs_of_true_succeed_with_a_summary_table() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "true", "-i", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Measurement"))
        .stdout(predicate::str::contains("Wall clock time (s)"))
        .stdout(predicate::str::contains("Involuntary context switches"));
}

#[test]
fn verbose_mode_reports_each_experiment() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-v", "-c", "true", "-i", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsing: true."))
        .stdout(predicate::str::contains("Running experiment: 0."))
        .stdout(predicate::str::contains("Running experiment: 2."))
        .stdout(predicate::str::contains("Executing true in child process."))
        .stdout(predicate::str::contains("Wall clock time:"));
}

#[test]
fn quiet_mode_suppresses_the_summary_table() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-q", "-c", "true", "-i", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Measurement").not());
}

#[test]
fn command_arguments_pass_through_the_tokenizer() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "sleep 0", "-i", "2"])
        .assert()
        .success();
}

// ---- CSV output ----

#[test]
fn csv_flag_writes_samples_and_summary_files() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "true", "-i", "4", "-s"])
        .assert()
        .success();

    let samples = std::fs::read_to_string(tmp.path().join("results.csv")).unwrap();
    let lines: Vec<&str> = samples.lines().collect();
    assert_eq!(lines.len(), 5, "header plus one row per iteration");
    assert!(lines[0].starts_with("Experiment,Wall clock time (s),"));
    assert_eq!(lines[0].split(',').count(), 12);
    for (index, row) in lines[1..].iter().enumerate() {
        let fields: Vec<&str> = row.split(',').collect();
        assert_eq!(fields.len(), 12);
        assert_eq!(fields[0], index.to_string());
        for field in &fields[1..] {
            field.parse::<i64>().unwrap();
        }
    }

    let summary = std::fs::read_to_string(tmp.path().join("results-summary.csv")).unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].split(',').count(), 22);
    assert_eq!(lines[1].split(',').count(), 22);
}

#[test]
fn latex_and_json_report_not_implemented_without_aborting() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "true", "-i", "2", "-l", "-j", "-s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("LaTeX output not implemented."))
        .stdout(predicate::str::contains("JSON output not implemented."));

    // The CSV outputs are still produced.
    assert!(tmp.path().join("results.csv").exists());
    assert!(tmp.path().join("results-summary.csv").exists());
    assert!(!tmp.path().join("results.tex").exists());
    assert!(!tmp.path().join("results.json").exists());
}

// ---- Failing measured commands ----

#[test]
fn failing_command_aborts_with_no_artifacts() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "false", "-i", "3", "-s"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("false"));

    assert!(!tmp.path().join("results.csv").exists());
    assert!(!tmp.path().join("results-summary.csv").exists());
}

#[test]
fn no_iterations_run_after_a_failure() {
    use std::os::unix::fs::PermissionsExt;

    // The tokenizer has no quoting, so the failing command lives in a
    // script: it leaves a marker line each time it runs, then exits 1.
    let tmp = TempDir::new().unwrap();
    let script = tmp.path().join("fail.sh");
    std::fs::write(&script, "#!/bin/sh\necho ran >> marker\nexit 1\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    benchrun_cmd(&tmp)
        .args(["-c", script.to_str().unwrap(), "-i", "3"])
        .assert()
        .failure();

    let marker = std::fs::read_to_string(tmp.path().join("marker")).unwrap();
    assert_eq!(
        marker.lines().count(),
        1,
        "iterations after the failing one must not execute"
    );
}

#[test]
fn unknown_executable_fails_to_spawn() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "/nonexistent/benchrun-integration-binary", "-i", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not start command"));
}

// ---- Configuration errors ----

#[test]
fn verbose_and_quiet_conflict() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-v", "-q", "-c", "true"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot be both verbose and quiet"));
}

#[test]
fn zero_iterations_rejected() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "true", "-i", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one iteration"));
}

#[test]
fn missing_command_flag_rejected() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp).args(["-i", "3"]).assert().failure();
}

#[test]
fn blank_command_string_rejected() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .args(["-c", "   ", "-i", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Must specify a command"));
}

#[test]
fn help_mentions_every_flag() {
    let tmp = TempDir::new().unwrap();
    benchrun_cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--command"))
        .stdout(predicate::str::contains("--iterations"))
        .stdout(predicate::str::contains("--latex"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--csv"))
        .stdout(predicate::str::contains("--quiet"))
        .stdout(predicate::str::contains("--verbose"));
}
