use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use testkit::{sample_trace, traces_json};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_tracesum")
}

fn write_traces(dir: &Path) -> PathBuf {
    let path = dir.join("traces.json");
    let untimed = {
        let mut spans = sample_trace("0000", 1_000);
        spans[0].timestamp = None;
        spans
    };
    let json = traces_json(&[
        sample_trace("aaaa", 1_000),
        sample_trace("bbbb", 4_000),
        untimed,
    ]);
    fs::write(&path, json).unwrap();
    path
}

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env("TRACESUM_CONFIG", dir.join("missing.toml"))
        .env_remove("TRACESUM_SERVICE")
        .env_remove("TRACESUM_UTC")
        .env_remove("TRACESUM_SORT")
        .env_remove("TRACESUM_MIN_DURATION")
        .env_remove("TRACESUM_SERVICE_GLOB")
        .stdin(Stdio::null())
        .output()
        .unwrap()
}

#[test]
fn prints_human_rows_in_input_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_traces(dir.path());

    let out = run(dir.path(), &[path.to_str().unwrap(), "--utc", "--service", "db"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "02-26-2016T00:51:51.000+0000 trace=aaaa duration=10.000ms width=25% spans=4 db=50% | apix2 max=10ms, dbx1 max=5ms, webx1 max=10ms"
    );
    assert!(lines[1].contains("trace=bbbb duration=40.000ms width=100%"));
    assert_eq!(lines[2], "-- 2 traces --");
}

#[test]
fn prints_json_rows_sorted_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_traces(dir.path());

    let out = run(
        dir.path(),
        &[path.to_str().unwrap(), "--json", "--sort", "duration_desc", "--service", "api"],
    );
    assert!(out.status.success());
    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let rows = rows.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["traceId"], "bbbb");
    assert_eq!(rows[0]["duration"], 40.0);
    assert_eq!(rows[0]["servicePercentage"], 100);
    assert_eq!(rows[1]["traceId"], "aaaa");
    assert_eq!(rows[1]["durationStr"], "10.000ms");
    assert_eq!(rows[1]["spanCount"], 4);
    assert_eq!(rows[1]["serviceDurations"][0]["name"], "api");
}

#[test]
fn min_duration_drops_fast_traces() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_traces(dir.path());

    let out = run(dir.path(), &[path.to_str().unwrap(), "--min-duration", "20ms"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("trace=bbbb"));
    assert!(!stdout.contains("trace=aaaa"));
    assert!(stdout.contains("-- 1 traces --"));
}

#[test]
fn reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_traces(dir.path());
    let config = dir.path().join("config.toml");
    fs::write(&config, "focus_service = \"db\"\nutc = true\nservice_glob = \"nope*\"\n").unwrap();

    let out = Command::new(bin())
        .arg(&path)
        .env("TRACESUM_CONFIG", &config)
        .env_remove("TRACESUM_SERVICE")
        .env_remove("TRACESUM_UTC")
        .env_remove("TRACESUM_SORT")
        .env_remove("TRACESUM_MIN_DURATION")
        .env_remove("TRACESUM_SERVICE_GLOB")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.trim(), "-- 0 traces --");
}

#[test]
fn rejects_bad_sort_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_traces(dir.path());

    let out = run(dir.path(), &[path.to_str().unwrap(), "--sort", "sideways"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("unknown sort order"));
}

#[test]
fn reports_unreadable_input() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{not json").unwrap();

    let out = run(dir.path(), &[bad.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("failed parsing"));
}

#[test]
fn lists_services() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_traces(dir.path());

    let out = run(dir.path(), &[path.to_str().unwrap(), "--services"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["api", "db", "web"]);
}
