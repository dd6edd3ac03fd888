use crate::common::command::{repository_dir, run_twig_command};
use crate::common::file::count_files;
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn init_creates_root_commit(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir;

    run_twig_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout("");

    let metadata = dir.path().join(".twig");
    assert!(metadata.join("state").is_file());
    assert_eq!(count_files(&metadata.join("commits")), 1);
    assert_eq!(count_files(&metadata.join("blobs")), 0);

    run_twig_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("===\ncommit "))
        .stdout(predicate::str::ends_with(
            "Date: Thu Jan 1 00:00:00 1970 +0000\ninitial commit\n\n",
        ));

    Ok(())
}

#[rstest]
fn root_commit_is_identical_across_repositories() -> Result<(), Box<dyn std::error::Error>> {
    let first = TempDir::new()?;
    let second = TempDir::new()?;

    run_twig_command(first.path(), &["init"]).assert().success();
    run_twig_command(second.path(), &["init"]).assert().success();

    let first_log = run_twig_command(first.path(), &["log"]).output()?.stdout;
    let second_log = run_twig_command(second.path(), &["log"]).output()?.stdout;
    assert_eq!(first_log, second_log);

    Ok(())
}
