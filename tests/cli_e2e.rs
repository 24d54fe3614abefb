//! End-to-end tests driving the `vcm` binary against a temporary home
//! directory, so the storage dir and catalog never touch the real `$HOME`.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn vcm(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("vcm").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

fn storage_dir(home: &TempDir) -> PathBuf {
    home.path().join(".VersionControl")
}

fn catalog_path(home: &TempDir) -> PathBuf {
    storage_dir(home).join("projects.toml")
}

/// A project tree at `<home>/proj` with a populated `.git`.
fn git_project(home: &TempDir) -> PathBuf {
    let proj = home.child("proj");
    proj.child(".git/HEAD")
        .write_str("ref: refs/heads/main\n")
        .unwrap();
    proj.path().to_path_buf()
}

#[test]
fn records_project_with_derived_name_and_moves_dot_folder() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--move")
        .assert()
        .success()
        .stderr(predicate::str::contains("proj-git"))
        .stderr(predicate::str::contains("moved"));

    // The dot-folder now lives in storage and the tree holds a symlink.
    let stored = storage_dir(&home).join("proj");
    assert_eq!(
        fs::read_to_string(stored.join("HEAD")).unwrap(),
        "ref: refs/heads/main\n"
    );
    let dot_folder = proj.join(".git");
    assert!(dot_folder.is_symlink());
    assert_eq!(fs::read_link(&dot_folder).unwrap(), stored);

    let catalog = fs::read_to_string(catalog_path(&home)).unwrap();
    assert!(catalog.contains("[proj-git]"));
    assert!(catalog.contains("vc_system = \"git\""));
}

#[test]
fn second_move_is_rejected_as_already_linked() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);

    vcm(&home).arg("--path").arg(&proj).arg("--move").assert().success();

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--move")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already a symbolic link"));
}

#[test]
fn recording_an_existing_identifier_leaves_the_catalog_unchanged() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--user-name")
        .arg("alice")
        .assert()
        .success();
    let before = fs::read(catalog_path(&home)).unwrap();

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--user-name")
        .arg("bob")
        .assert()
        .success()
        .stderr(predicate::str::contains("already in the catalog"));

    let after = fs::read(catalog_path(&home)).unwrap();
    assert_eq!(before, after);
    assert!(String::from_utf8(after).unwrap().contains("user = \"alice\""));
}

#[test]
fn missing_identifier_fails_without_writing_anything() {
    let home = TempDir::new().unwrap();

    vcm(&home)
        .arg("--identifier")
        .arg("proj-svn")
        .assert()
        .failure()
        .stderr(predicate::str::contains("identifier not found"))
        .stderr(predicate::str::contains("proj-svn"));

    assert!(!catalog_path(&home).exists());
    assert!(!storage_dir(&home).exists());
}

#[test]
fn looked_up_project_can_be_moved() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);

    vcm(&home).arg("--path").arg(&proj).assert().success();

    vcm(&home)
        .arg("--identifier")
        .arg("proj-git")
        .arg("--move")
        .assert()
        .success()
        .stderr(predicate::str::contains("moved"));

    assert!(proj.join(".git").is_symlink());
}

#[test]
fn unknown_version_control_kind_is_fatal() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--version-control")
        .arg("hg")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown version control system"));

    assert!(!catalog_path(&home).exists());
}

#[test]
fn github_flag_prints_derived_remotes() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--git-hub")
        .arg("--user-name")
        .arg("alice")
        .assert()
        .success()
        .stdout(predicate::str::contains("https://github.com/alice/proj"))
        .stdout(predicate::str::contains("git@github.com:alice/proj.git"));
}

#[test]
fn name_collision_in_storage_is_fatal_and_leaves_the_source() {
    let home = TempDir::new().unwrap();
    let proj = git_project(&home);
    fs::create_dir_all(storage_dir(&home).join("proj")).unwrap();

    vcm(&home)
        .arg("--path")
        .arg(&proj)
        .arg("--move")
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination already exists"));

    let dot_folder = proj.join(".git");
    assert!(dot_folder.is_dir() && !dot_folder.is_symlink());
}
