use crate::common::command::{
    init_repository_dir, repository_with_history, run_twig_command, twig_add_and_commit,
};
use crate::common::file::{FileSpec, random_content, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn rm_tracked_file_deletes_and_stages_removal(repository_with_history: TempDir) {
    let dir = repository_with_history;

    run_twig_command(dir.path(), &["rm", "f.txt"])
        .assert()
        .success()
        .stdout("");

    assert!(!dir.path().join("f.txt").exists());

    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\nf.txt\n\n"));

    run_twig_command(dir.path(), &["commit", "drop f"])
        .assert()
        .success()
        .stdout("");

    run_twig_command(dir.path(), &["checkout", "--", "f.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");
}

#[rstest]
fn rm_staged_file_only_unstages(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("new.txt"), random_content()));

    run_twig_command(dir.path(), &["add", "new.txt"])
        .assert()
        .success();
    run_twig_command(dir.path(), &["rm", "new.txt"])
        .assert()
        .success()
        .stdout("");

    assert!(dir.path().join("new.txt").exists());

    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("=== Untracked Files ===\nnew.txt\n\n"));
}

#[rstest]
fn rm_unknown_file_has_no_reason(init_repository_dir: TempDir) {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("loose.txt"), random_content()));

    run_twig_command(dir.path(), &["rm", "loose.txt"])
        .assert()
        .success()
        .stdout("No reason to remove the file.\n");

    assert!(dir.path().join("loose.txt").exists());
}

#[rstest]
fn rm_tracked_file_whose_dir_is_gone(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("d/f.txt"), random_content()));
    twig_add_and_commit(dir.path(), &["d/f.txt"], "track d/f");

    std::fs::remove_dir_all(dir.path().join("d"))?;

    run_twig_command(dir.path(), &["rm", "d/f.txt"])
        .assert()
        .success()
        .stdout("");

    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\nd/f.txt\n\n"));

    Ok(())
}
