//! Runs the built binary against offline commands

use std::fs;
use std::process::{Command, Output};

use serde_json::Value;

fn bitrewards(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bitrewards"))
        .args(args)
        .output()
        .expect("failed to run bitrewards")
}

fn json_output(args: &[&str]) -> Value {
    let output = bitrewards(args);
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

fn approx(value: &Value, expected: f64) -> bool {
    (value.as_f64().unwrap() - expected).abs() < 1e-9
}

#[test]
fn test_tvl_with_explicit_price() {
    let out = json_output(&["tvl", "1000", "1100", "--price", "1", "--json"]);
    assert!(approx(&out["standing"]["tvl"], 2_100.0));
    assert_eq!(out["standing"]["level"], "LEVEL_2");
    assert_eq!(out["standing"]["next_level"], "LEVEL_3");
}

#[test]
fn test_brand_boost_split() {
    let out = json_output(&["split", "100", "--boost", "brand", "--json"]);
    let d = &out["distribution"];
    assert!(approx(&d["to_protocol"], 10.0));
    assert!(approx(&d["to_referrer"], 5.0));
    assert!(approx(&d["to_brand"], 85.0));
    assert!(approx(&d["to_user"], 0.0));
}

#[test]
fn test_like_past_cap_earns_nothing() {
    let args = [
        "engage", "--level", "LEVEL_0", "--reward", "1", "--cap", "1000", "--budget", "10",
        "--json",
    ];

    let mut at_cap = args.to_vec();
    at_cap.extend(["--likes", "999"]);
    assert!(approx(&json_output(&at_cap)["outcome"]["reward"], 1.0));

    let mut past_cap = args.to_vec();
    past_cap.extend(["--likes", "1000"]);
    let out = json_output(&past_cap);
    assert!(approx(&out["outcome"]["reward"], 0.0));
    assert_eq!(out["post"]["like_count"], 1001);
}

#[test]
fn test_streak_milestone() {
    let out = json_output(&[
        "streak", "--last", "2025-03-13", "--streak", "13", "--today", "2025-03-14", "--json",
    ]);
    assert_eq!(out["outcome"]["streak"], 14);
    assert_eq!(out["outcome"]["streak_bonus"], 50);
    assert_eq!(out["next_milestone"], 30);
}

#[test]
fn test_streak_past_last_milestone() {
    let out = json_output(&[
        "streak", "--last", "2025-04-28", "--streak", "59", "--today", "2025-04-29", "--json",
    ]);
    assert_eq!(out["outcome"]["streak"], 60);
    assert_eq!(out["outcome"]["streak_bonus"], 0);
    assert!(out["next_milestone"].is_null());
}

#[test]
fn test_config_file_overrides_thresholds() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewards.toml");
    fs::write(
        &path,
        "[levels]\nlevel1 = 10.0\nlevel2 = 20.0\nlevel3 = 30.0\n",
    )
    .unwrap();

    let out = json_output(&["--config", path.to_str().unwrap(), "level", "25", "--json"]);
    assert_eq!(out["level"], "LEVEL_2");
}

#[test]
fn test_invalid_config_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rewards.toml");
    fs::write(&path, "[split]\nprotocol_percent = 50.0\n").unwrap();

    let output = bitrewards(&["--config", path.to_str().unwrap(), "level", "25"]);
    assert!(!output.status.success());
}
