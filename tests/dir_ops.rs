mod common;

use std::fs;
use std::os::unix::fs::symlink;
use std::path::PathBuf;

use fsutil::{
    create_dir_for_file, create_dir_recursive, remove_dir_recursive, FsUtilError, PATH_MAX,
};

use common::Sandbox;

#[test]
fn create_dir_recursive_creates_every_missing_segment() {
    let sandbox = Sandbox::new("mkdir_segments");
    let target = sandbox.path().join("one/two/three");

    create_dir_recursive(&target).expect("recursive create failed");

    assert!(sandbox.path().join("one").is_dir());
    assert!(sandbox.path().join("one/two").is_dir());
    assert!(target.is_dir());
}

#[test]
fn create_dir_recursive_is_idempotent() {
    let sandbox = Sandbox::new("mkdir_twice");
    let target = sandbox.path().join("a/b");

    create_dir_recursive(&target).expect("first create failed");
    create_dir_recursive(&target).expect("second create failed");

    assert!(target.is_dir());
}

#[test]
fn create_dir_recursive_tolerates_partially_existing_prefixes() {
    let sandbox = Sandbox::new("mkdir_partial");
    create_dir_recursive(sandbox.path().join("a/b")).expect("first create failed");

    create_dir_recursive(sandbox.path().join("a/b/c/d")).expect("deepening create failed");

    assert!(sandbox.path().join("a/b/c/d").is_dir());
}

#[test]
fn create_dir_recursive_fails_on_non_directory_component() {
    let sandbox = Sandbox::new("mkdir_blocked");
    fs::write(sandbox.path().join("blocker"), b"not a dir").unwrap();

    let err = create_dir_recursive(sandbox.path().join("blocker/child"))
        .expect_err("create through a file should fail");

    match err {
        FsUtilError::Io { op, path, .. } => {
            assert_eq!(op, "mkdir");
            assert_eq!(path, sandbox.path().join("blocker/child"));
        }
        other => panic!("expected an Io error, got {other}"),
    }
}

#[test]
fn create_dir_for_file_creates_parents_but_not_the_file() {
    let sandbox = Sandbox::new("mkdir_for_file");
    let file_path = sandbox.path().join("a/b/c/file.txt");

    create_dir_for_file(&file_path).expect("parent creation failed");

    assert!(sandbox.path().join("a/b/c").is_dir());
    assert!(!file_path.exists());
}

#[test]
fn remove_dir_recursive_is_a_no_op_for_missing_paths() {
    let sandbox = Sandbox::new("rm_missing");
    let ghost = sandbox.path().join("never_created");

    remove_dir_recursive(&ghost).expect("missing path should be success");

    assert!(!ghost.exists());
    assert!(sandbox.path().is_dir());
}

#[test]
fn remove_dir_recursive_removes_a_mixed_tree() {
    let sandbox = Sandbox::new("rm_tree");
    let root = sandbox.path().join("victim");
    create_dir_recursive(root.join("a/deep/nest")).unwrap();
    create_dir_recursive(root.join("empty")).unwrap();
    fs::write(root.join("top.txt"), b"top").unwrap();
    fs::write(root.join("a/mid.txt"), b"mid").unwrap();
    fs::write(root.join("a/deep/nest/leaf.bin"), [0u8; 256]).unwrap();

    remove_dir_recursive(&root).expect("removal failed");

    assert!(!root.exists());
    assert!(sandbox.path().is_dir());
}

#[test]
fn remove_dir_recursive_is_idempotent() {
    let sandbox = Sandbox::new("rm_twice");
    let root = sandbox.path().join("victim");
    create_dir_recursive(root.join("inner")).unwrap();
    fs::write(root.join("inner/file"), b"x").unwrap();

    remove_dir_recursive(&root).expect("first removal failed");
    remove_dir_recursive(&root).expect("second removal should be a no-op");

    assert!(!root.exists());
}

#[test]
fn remove_dir_recursive_unlinks_symlinks_without_following_them() {
    let sandbox = Sandbox::new("rm_symlink");
    let outside = sandbox.path().join("outside.txt");
    fs::write(&outside, b"survivor").unwrap();
    let tree = sandbox.path().join("tree");
    create_dir_recursive(&tree).unwrap();
    symlink(&outside, tree.join("link")).unwrap();

    remove_dir_recursive(&tree).expect("removal failed");

    assert!(!tree.exists());
    assert_eq!(fs::read(&outside).unwrap(), b"survivor");
}

#[test]
fn remove_dir_recursive_rejects_overlong_paths() {
    let mut path = PathBuf::from("/");
    while path.as_os_str().len() < PATH_MAX {
        path.push("x".repeat(255));
    }

    let err = remove_dir_recursive(&path).expect_err("overlong path should fail");

    assert!(err.is_path_too_long());
    assert!(err.os_error().is_none());
}
