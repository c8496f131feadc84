//! Machine-readable output of the pq-cli binary.

use std::path::PathBuf;
use std::process::{Command, Output};

fn work_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("pq_cli_{}_{}", std::process::id(), name));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Run in an empty directory so no `config.json` is picked up.
fn run(name: &str, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_pq-cli"));
    cmd.args(args)
        .current_dir(work_dir(name))
        .env("RUST_LOG", "info")
        .env_remove("PQT_S_RATED")
        .env_remove("PQT_P_MAX")
        .env_remove("PQT_Q_MAX");
    for (key, value) in env {
        cmd.env(key, value);
    }
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "pq-cli failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    output
}

#[test]
fn json_preset_is_parseable_with_logging_on() {
    let out = run(
        "json_preset",
        &["--json", "preset", "voltage-support", "--current-p", "45"],
        &[],
    );
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

    assert_eq!(value["candidate"]["q_mvar"], 35.0);
    assert_eq!(value["clamp"]["rating"], true);
    assert_eq!(value["clamp"]["thermal"], false);

    let p = value["point"]["p_mw"].as_f64().unwrap();
    let q = value["point"]["q_mvar"].as_f64().unwrap();
    assert!((p.hypot(q) - 50.0).abs() < 1e-6);

    // the clamp was logged, just not on stdout
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("preset"));
}

#[test]
fn geometry_csv_has_no_log_lines() {
    let out = run(
        "geometry",
        &["geometry", "--governor", "100", "--excitation", "100"],
        &[],
    );
    let stdout = String::from_utf8(out.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("series,label,x,y"));

    let rows: Vec<&str> = lines.collect();
    // 181 arc samples, two points per PF ray, two for the operating ray
    assert_eq!(rows.len(), 181 + 2 * 3 + 2);
    assert!(rows.iter().all(|row| row.split(',').count() == 4));
}

#[test]
fn bad_env_override_warns_once_on_stderr() {
    let out = run("bad_env", &["--json", "point"], &[("PQT_S_RATED", "abc")]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["point"]["p_mw"], 25.0);

    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stderr.matches("PQT_S_RATED").count(), 1);
}
