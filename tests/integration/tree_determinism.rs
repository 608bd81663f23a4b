//! Integration tests for scan determinism

use super::test_utils::write_file;
use std::fs;
use tempfile::TempDir;
use treeseal::manifest;
use treeseal::tree::scanner::{scan, Scanner};
use treeseal::tree::walker::WalkerConfig;
use treeseal::types::RelativePath;

fn populate(root: &std::path::Path) {
    write_file(root, "file1.txt", "content1");
    write_file(root, "file2.txt", "content2");
    write_file(root, "dir1/file3.txt", "content3");
    write_file(root, "dir1/nested/deep/file4.bin", "content4");
    fs::create_dir_all(root.join("empty_dir")).unwrap();
}

/// Test that the same filesystem produces the same manifest
#[test]
fn test_same_filesystem_same_manifest() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let first = scan(temp_dir.path()).unwrap().into_manifest();
    let second = scan(temp_dir.path()).unwrap().into_manifest();

    assert_eq!(first, second);
    assert_eq!(
        manifest::to_json_string(&first).unwrap(),
        manifest::to_json_string(&second).unwrap()
    );
}

/// Two trees built in different creation orders serialize byte-identically
#[test]
fn test_creation_order_does_not_matter() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();

    for name in ["z.txt", "m/inner.txt", "a.txt"] {
        write_file(a.path(), name, name);
    }
    for name in ["a.txt", "m/inner.txt", "z.txt"] {
        write_file(b.path(), name, name);
    }

    let ma = scan(a.path()).unwrap().into_manifest();
    let mb = scan(b.path()).unwrap().into_manifest();
    assert_eq!(
        manifest::to_json_string(&ma).unwrap(),
        manifest::to_json_string(&mb).unwrap()
    );
}

/// Every regular file at any depth is keyed; directories never are
#[test]
fn test_scan_includes_files_excludes_directories() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let manifest = scan(temp_dir.path()).unwrap().into_manifest();
    let keys: Vec<&str> = manifest.paths().map(|p| p.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "dir1/file3.txt",
            "dir1/nested/deep/file4.bin",
            "file1.txt",
            "file2.txt",
        ]
    );
    assert!(!manifest.contains(&RelativePath::from("dir1")));
    assert!(!manifest.contains(&RelativePath::from("empty_dir")));
}

/// Content changes show up only under the changed key
#[test]
fn test_content_change_changes_only_that_digest() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());

    let before = scan(temp_dir.path()).unwrap().into_manifest();
    fs::write(temp_dir.path().join("file2.txt"), "changed").unwrap();
    let after = scan(temp_dir.path()).unwrap().into_manifest();

    for (path, digest) in before.iter() {
        if path.as_str() == "file2.txt" {
            assert_ne!(after.get(path), Some(digest));
        } else {
            assert_eq!(after.get(path), Some(digest));
        }
    }
}

/// Ignore patterns from configuration prune whole subtrees
#[test]
fn test_ignore_patterns_prune_subtrees() {
    let temp_dir = TempDir::new().unwrap();
    populate(temp_dir.path());
    write_file(temp_dir.path(), ".git/objects/ab/cdef", "blob");

    let manifest = Scanner::new(temp_dir.path().to_path_buf())
        .with_walker_config(WalkerConfig {
            ignore_patterns: vec![".git".to_string(), "nested".to_string()],
            max_depth: None,
        })
        .scan()
        .unwrap()
        .into_manifest();

    let keys: Vec<&str> = manifest.paths().map(|p| p.as_str()).collect();
    assert_eq!(keys, vec!["dir1/file3.txt", "file1.txt", "file2.txt"]);
}
