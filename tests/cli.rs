use assert_cmd::Command;

fn pidpi() -> Command {
    let mut cmd = Command::cargo_bin("pidpi").unwrap();
    cmd.env("PIDPI_ENV", "local").env("RUST_LOG", "off");
    cmd
}

#[test]
fn prints_announcement_then_record() {
    let output = pidpi().output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "PIDPI Project initialized successfully!");
    assert!(lines[1].starts_with("Project Info: "));
    assert!(lines[1].contains("\"active\""));
    assert!(lines[1].contains("\"1.0.0\""));
}

#[test]
fn record_line_is_valid_json() {
    let output = pidpi().output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let record_line = stdout.lines().nth(1).unwrap();

    let json = record_line.strip_prefix("Project Info: ").unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    let fields: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(fields.len(), 3);
    assert!(fields.contains(&"status"));
    assert!(fields.contains(&"timestamp"));
    assert!(fields.contains(&"version"));
}

#[test]
fn diagnostics_stay_off_stdout() {
    let output = pidpi()
        .env("RUST_LOG", "debug")
        .env("PIDPI_TELEMETRY__LOG_FORMAT", "json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("project initialized"));
}

fn assert_reported(output: &std::process::Output) {
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "PIDPI Project initialized successfully!");
    assert!(lines[1].contains("\"active\""));
}

#[test]
fn unknown_environment_still_reports_with_defaults() {
    let output = pidpi()
        .env("PIDPI_ENV", "qa")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert_reported(&output);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load PIDPI settings, using defaults"));
    assert!(stderr.contains("unsupported environment 'qa'"));
}

#[test]
fn malformed_log_format_still_reports_with_defaults() {
    let output = pidpi()
        .env("PIDPI_TELEMETRY__LOG_FORMAT", "xml")
        .env("RUST_LOG", "warn")
        .output()
        .unwrap();
    assert_reported(&output);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("failed to load PIDPI settings, using defaults"));
}

#[test]
fn invalid_log_level_still_reports_with_default_filter() {
    let output = pidpi()
        .env_remove("RUST_LOG")
        .env("PIDPI_TELEMETRY__LOG_LEVEL", "pidpi=verbose")
        .output()
        .unwrap();
    assert_reported(&output);

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid log level directive 'pidpi=verbose'"));
    assert!(stderr.contains("using default telemetry settings"));
}
