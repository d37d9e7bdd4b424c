// main.rsとエントリーポイントのテスト
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn get_binary_path() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    if path.ends_with("deps") {
        path.pop(); // remove deps directory
    }
    path.join("method_bench")
}

#[test]
fn test_cli_help() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--help")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("method_bench"));
    assert!(stdout.contains("--iterations"));
    assert!(stdout.contains("--target-mode"));
}

#[test]
fn test_cli_version() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI version test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("method_bench"));
}

#[test]
fn test_cli_report_output() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI report test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["--seed", "3", "--warmup", "0.05", "--time", "0.1"])
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Warming up"));
    assert!(stdout.contains("Calculating"));
    assert!(stdout.contains("Comparison:"));
    assert!(stdout.contains("define_method"));
    assert!(stdout.contains("module_eval with string"));
    assert!(stdout.contains("x  slower"));
}

#[test]
fn test_cli_json_and_verify() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI json test - binary not found");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("report.json");

    let output = Command::new(&binary_path)
        .args(["-n", "3", "--iterations", "10", "--quiet", "--verify", "--json"])
        .arg(&report_path)
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Comparison:"));
    assert!(stdout.matches(": win").count() >= 2);

    let content = fs::read_to_string(&report_path).unwrap();
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["names"].as_array().map(Vec::len), Some(3));
    assert!(json["results"]["winner"].is_string());
}

#[test]
fn test_cli_config_file() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI config test - binary not found");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bench.json");
    let report_path = temp_dir.path().join("report.json");
    fs::write(&config_path, r#"{"name_count": 2, "iterations": 5}"#).unwrap();

    let output = Command::new(&binary_path)
        .arg("--config")
        .arg(&config_path)
        .arg("--json")
        .arg(&report_path)
        .arg("--quiet")
        .output()
        .expect("Failed to execute binary");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).unwrap()).unwrap();
    assert_eq!(json["config"]["name_count"], 2);
    assert_eq!(json["config"]["iterations"], 5);
}

#[test]
fn test_cli_invalid_configuration_exits_non_zero() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI error test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["--time", "0"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("エラー"));
}

#[test]
fn test_cli_missing_config_file_exits_non_zero() {
    let binary_path = get_binary_path();
    if !binary_path.exists() {
        println!("Skipping CLI error test - binary not found");
        return;
    }

    let output = Command::new(&binary_path)
        .args(["--config", "/nonexistent/bench.json"])
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}
