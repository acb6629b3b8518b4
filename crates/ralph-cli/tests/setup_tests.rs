//! End-to-end tests for the `ralph-setup` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn installed_home() -> TempDir {
    let home = TempDir::new().unwrap();
    let templates = home.path().join("templates");
    fs::create_dir_all(templates.join("specs")).unwrap();
    fs::write(templates.join("PROMPT.md"), "# Ralph prompt\n").unwrap();
    fs::write(templates.join("fix_plan.md"), "# Fix plan\n").unwrap();
    fs::write(templates.join("AGENT.md"), "# Agent\n").unwrap();
    fs::write(templates.join("specs/api.md"), "# API\n").unwrap();
    home
}

fn setup(home: &Path, work: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("ralph-setup");
    cmd.current_dir(work)
        .env("RALPH_HOME", home)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn creates_named_project() {
    let home = installed_home();
    let work = TempDir::new().unwrap();

    setup(home.path(), work.path())
        .arg("svc")
        .assert()
        .success()
        .stdout(predicate::str::contains("cd svc"));

    let project = work.path().join("svc");
    assert_eq!(fs::read_to_string(project.join("README.md")).unwrap(), "# svc\n");
    for dir in ["specs/stdlib", "logs", "docs/generated"] {
        assert!(project.join(dir).is_dir(), "missing {dir}");
    }
    assert!(!project.join("src").exists());
    assert!(project.join("@fix_plan.md").is_file());
    assert!(project.join("specs/api.md").is_file());
}

#[test]
fn defaults_to_my_project() {
    let home = installed_home();
    let work = TempDir::new().unwrap();

    setup(home.path(), work.path()).assert().success();
    assert!(work.path().join("my-project/PROMPT.md").is_file());
}

#[test]
fn rerun_keeps_readme() {
    let home = installed_home();
    let work = TempDir::new().unwrap();

    setup(home.path(), work.path()).arg("svc").assert().success();
    fs::write(work.path().join("svc/README.md"), "custom").unwrap();
    setup(home.path(), work.path()).arg("svc").assert().success();

    assert_eq!(
        fs::read_to_string(work.path().join("svc/README.md")).unwrap(),
        "custom"
    );
}

#[test]
fn invalid_name_exits_one() {
    let home = installed_home();
    let work = TempDir::new().unwrap();

    setup(home.path(), work.path())
        .arg(".hidden")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".hidden"));
    assert!(fs::read_dir(work.path()).unwrap().next().is_none());
}

#[test]
fn missing_template_root_exits_one() {
    let home = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    setup(home.path(), work.path())
        .arg("svc")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[ERROR] Template directory not found"));
    assert!(!work.path().join("svc").exists());
}
