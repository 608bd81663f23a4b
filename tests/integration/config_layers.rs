//! Configuration layering through the binary: global file, --config, env.

use super::test_utils::{stderr, stdout, Sandbox};
use std::fs;

fn write_global_config(sandbox: &Sandbox, content: &str) {
    let dir = sandbox.config_home().join("treeseal");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_global_config_ignore_patterns() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    sandbox.write(".git/HEAD", "ref: refs/heads/main");
    write_global_config(&sandbox, "[scan]\nignore = [\".git\"]\n");

    let manifest = sandbox.manifest_path();
    let output = sandbox.run(&[
        "-d",
        sandbox.tree().to_str().unwrap(),
        "-o",
        manifest.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let content = fs::read_to_string(&manifest).unwrap();
    assert!(content.contains("a.txt"));
    assert!(!content.contains(".git"));
}

#[test]
fn test_explicit_config_replaces_global() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    write_global_config(&sandbox, "[report]\nformat = \"text\"\n");
    let explicit = sandbox.dir.path().join("explicit.toml");
    fs::write(&explicit, "[report]\nformat = \"json\"\n").unwrap();
    fs::write(sandbox.manifest_path(), "{}").unwrap();

    let manifest = sandbox.manifest_path();
    let output = sandbox.run(&[
        "--config",
        explicit.to_str().unwrap(),
        "-d",
        sandbox.tree().to_str().unwrap(),
        "-c",
        manifest.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["added"], serde_json::json!(["a.txt"]));
}

#[test]
fn test_environment_overrides_global_file() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    write_global_config(&sandbox, "[report]\nformat = \"text\"\n");
    fs::write(sandbox.manifest_path(), "{}").unwrap();

    let manifest = sandbox.manifest_path();
    let output = sandbox
        .command()
        .env("TREESEAL__REPORT__FORMAT", "json")
        .args([
            "-d",
            sandbox.tree().to_str().unwrap(),
            "-c",
            manifest.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert!(serde_json::from_str::<serde_json::Value>(&stdout(&output)).is_ok());
}

#[test]
fn test_cli_format_overrides_config() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    write_global_config(&sandbox, "[report]\nformat = \"json\"\n");
    fs::write(sandbox.manifest_path(), "{}").unwrap();

    let manifest = sandbox.manifest_path();
    let output = sandbox.run(&[
        "--format",
        "text",
        "-d",
        sandbox.tree().to_str().unwrap(),
        "-c",
        manifest.to_str().unwrap(),
    ]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("[ADDED]\n+ a.txt"));
}

#[test]
fn test_invalid_config_fails() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    write_global_config(&sandbox, "[report]\nformat = \"yaml\"\n");

    let manifest = sandbox.manifest_path();
    let output = sandbox.run(&[
        "-d",
        sandbox.tree().to_str().unwrap(),
        "-o",
        manifest.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("report.format"));
    assert!(!manifest.exists());
}

#[test]
fn test_missing_explicit_config_fails() {
    let sandbox = Sandbox::new();
    let missing = sandbox.dir.path().join("nope.toml");
    let manifest = sandbox.manifest_path();

    let output = sandbox.run(&[
        "--config",
        missing.to_str().unwrap(),
        "-o",
        manifest.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Configuration"));
}
