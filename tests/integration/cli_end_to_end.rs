//! End-to-end tests for the treeseal binary: exit codes, streams, and output.

use super::test_utils::{stderr, stdout, Sandbox};
use std::fs;

fn generate(sandbox: &Sandbox) -> std::process::Output {
    let manifest = sandbox.manifest_path();
    sandbox.run(&[
        "--directory",
        sandbox.tree().to_str().unwrap(),
        "--output",
        manifest.to_str().unwrap(),
    ])
}

fn compare(sandbox: &Sandbox, extra: &[&str]) -> std::process::Output {
    let manifest = sandbox.manifest_path();
    let tree = sandbox.tree();
    let mut args = vec![
        "--directory",
        tree.to_str().unwrap(),
        "--compare",
        manifest.to_str().unwrap(),
    ];
    args.extend_from_slice(extra);
    sandbox.run(&args)
}

#[test]
fn test_generate_writes_manifest() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    sandbox.write("b.txt", "world");

    let output = generate(&sandbox);
    assert!(output.status.success(), "stderr={}", stderr(&output));

    let out = stdout(&output);
    assert!(out.starts_with("Generating hashes for directory: "));
    assert!(out.contains("Successfully created hash manifest at: "));
    assert!(out.contains("(2 files)"));

    let content = fs::read_to_string(sandbox.manifest_path()).unwrap();
    assert_eq!(
        content,
        "{\n    \"a.txt\": \"2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824\",\n    \"b.txt\": \"486ea46224d1bb4fb680f34f7c9ad96a8f24ec88be73ea8e5a6c65260e9cb8a7\"\n}\n"
    );
}

#[test]
fn test_modify_and_add_reported() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    sandbox.write("b.txt", "world");
    assert!(generate(&sandbox).status.success());

    sandbox.write("b.txt", "world!");
    sandbox.write("c.txt", "new");

    let output = compare(&sandbox, &[]);
    assert_eq!(output.status.code(), Some(0), "differences are not a failure");

    let out = stdout(&output);
    assert!(out.starts_with("Comparing directory '"));
    assert!(out.contains("[ADDED]\n+ c.txt"));
    assert!(out.contains("[MODIFIED]\n~ b.txt"));
    assert!(!out.contains("[REMOVED]"));
    assert!(!out.contains("a.txt"));
    assert!(!out.contains('\u{1b}'), "NO_COLOR disables colour");
}

#[test]
fn test_clean_compare() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    assert!(generate(&sandbox).status.success());

    let output = compare(&sandbox, &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().last(), Some("No changes detected."));
}

#[test]
fn test_json_report_format() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    assert!(generate(&sandbox).status.success());
    fs::remove_file(sandbox.tree().join("a.txt")).unwrap();

    let output = compare(&sandbox, &["--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["changed"], serde_json::json!(true));
    assert_eq!(value["removed"], serde_json::json!(["a.txt"]));
    assert_eq!(value["added"], serde_json::json!([]));
}

#[test]
fn test_neither_mode_is_usage_error() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["-d", sandbox.tree().to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(!stderr(&output).is_empty());
}

#[test]
fn test_both_modes_is_usage_error() {
    let sandbox = Sandbox::new();
    let manifest = sandbox.manifest_path();
    let output = sandbox.run(&[
        "-o",
        manifest.to_str().unwrap(),
        "-c",
        manifest.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "");
    assert!(!manifest.exists(), "usage errors do no work");
}

#[test]
fn test_missing_directory_fails() {
    let sandbox = Sandbox::new();
    let missing = sandbox.dir.path().join("missing");
    let manifest = sandbox.manifest_path();

    let output = sandbox.run(&[
        "-d",
        missing.to_str().unwrap(),
        "-o",
        manifest.to_str().unwrap(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("Error: "));
    assert!(!manifest.exists());
}

#[test]
fn test_missing_manifest_fails() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");

    let output = compare(&sandbox, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("not found"));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_unparseable_manifest_fails_without_report() {
    let sandbox = Sandbox::new();
    sandbox.write("a.txt", "hello");
    fs::write(sandbox.manifest_path(), "[1, 2, 3]").unwrap();

    let output = compare(&sandbox, &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse manifest"));
    assert_eq!(stdout(&output), "");
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_warns_and_continues() {
    use std::os::unix::fs::PermissionsExt;

    let sandbox = Sandbox::new();
    sandbox.write("ok.txt", "fine");
    sandbox.write("locked.txt", "secret");
    let locked = sandbox.tree().join("locked.txt");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read(&locked).is_ok() {
        // Running as root: permissions are not enforced
        return;
    }

    let output = generate(&sandbox);
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();

    assert!(output.status.success());
    assert!(stderr(&output).contains("warning: skipped"));
    assert!(stdout(&output).contains("(1 file)"));
    let content = fs::read_to_string(sandbox.manifest_path()).unwrap();
    assert!(!content.contains("locked.txt"));
}
