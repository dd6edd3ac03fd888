use crate::common::COMMIT_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_twig_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// Shared history: `f.txt` committed as "a" in c1, then as "b" in c2
#[fixture]
pub fn repository_with_history(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("f.txt"), "a".to_string()));
    run_twig_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    twig_commit(dir.path(), "c1").assert().success();

    write_file(FileSpec::new(dir.path().join("f.txt"), "b".to_string()));
    run_twig_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();
    twig_commit(dir.path(), "c2").assert().success();

    dir
}

pub fn run_twig_command(dir: &Path, args: &[&str]) -> Command {
    let mut twig_cmd = Command::cargo_bin("twig").expect("Failed to find twig binary");
    twig_cmd
        .current_dir(dir)
        .args(args)
        .env("NO_PAGER", "1")
        .env("TWIG_COMMIT_DATE", COMMIT_DATE)
        .env_remove("TWIG_LOG");

    twig_cmd
}

pub fn twig_commit(dir: &Path, message: &str) -> Command {
    run_twig_command(dir, &["commit", message])
}

/// Stage every given file and commit them
pub fn twig_add_and_commit(dir: &Path, files: &[&str], message: &str) {
    for file in files {
        run_twig_command(dir, &["add", file]).assert().success();
    }
    twig_commit(dir, message).assert().stdout("").success();
}

/// Commit IDs printed by `log`, newest first
pub fn log_commit_ids(dir: &Path) -> Vec<String> {
    let output = run_twig_command(dir, &["log"])
        .output()
        .expect("Failed to run log");

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter_map(|line| line.strip_prefix("commit "))
        .map(str::to_string)
        .collect()
}

pub fn head_commit_id(dir: &Path) -> String {
    log_commit_ids(dir)
        .into_iter()
        .next()
        .expect("log printed no commit")
}

/// ID of the single commit with `message`
pub fn find_commit_id(dir: &Path, message: &str) -> String {
    let output = run_twig_command(dir, &["find", message])
        .output()
        .expect("Failed to run find");

    let ids = String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect::<Vec<_>>();
    assert_eq!(ids.len(), 1, "expected one commit with message {message}");

    ids[0].clone()
}
