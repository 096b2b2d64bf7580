use std::fs;
use std::path::PathBuf;
use std::process::Command;

const SCRIPT: &str = "5\n5\n1:1,2:0,2:3,3:4,4:3\n0:1,2:3,3:0,3:4,4:1\n5\n0:1,4:3,2:3,3:1,4:1\n0:1,0:0,1:2,2:3,4:3\n";

/// Per-test path in the temp dir, cleared of anything a failed run left behind.
fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("battleship-{}-{}", std::process::id(), name));
    let _ = fs::remove_file(&path);
    path
}

fn run(input: &PathBuf, output: &PathBuf, extra: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_battleship"))
        .arg("--input-file")
        .arg(input)
        .arg("--output-file")
        .arg(output)
        .args(extra)
        .output()
        .expect("failed to run battleship binary")
}

#[test]
fn writes_text_report() {
    let input = temp_path("text-in.txt");
    let output = temp_path("text-out.txt");
    fs::write(&input, SCRIPT).unwrap();

    let out = run(&input, &output, &[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "Player1 wins");

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.starts_with("Player1\nO O _ _ _\n"));
    assert!(report.ends_with("P1: 3\nP2: 2\nPlayer1 wins"));

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn writes_json_report() {
    let input = temp_path("json-in.txt");
    let output = temp_path("json-out.txt");
    fs::write(&input, SCRIPT).unwrap();

    let out = run(&input, &output, &["--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).expect("invalid json");
    assert_eq!(v["verdict"], "Player1 wins");

    let _ = fs::remove_file(input);
    let _ = fs::remove_file(output);
}

#[test]
fn short_input_fails_without_output() {
    let input = temp_path("short-in.txt");
    let output = temp_path("short-out.txt");
    fs::write(&input, "5\n5\n1:1\n").unwrap();

    let out = run(&input, &output, &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("incomplete input"), "stderr: {}", stderr);
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}

#[test]
fn missing_input_file_fails() {
    let output = temp_path("missing-out.txt");
    let out = run(&temp_path("does-not-exist.txt"), &output, &[]);
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn oversized_grid_fails_without_output() {
    let input = temp_path("huge-in.txt");
    let output = temp_path("huge-out.txt");
    fs::write(&input, format!("{}\n1\n0:0\n0:0\n1\n0:0\n0:0\n", usize::MAX)).unwrap();

    let out = run(&input, &output, &[]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("too large"), "stderr: {}", stderr);
    assert!(!output.exists());

    let _ = fs::remove_file(input);
}
