use crate::common::command::{
    init_repository_dir, repository_with_history, run_twig_command, twig_add_and_commit,
};
use crate::common::file::{FileSpec, count_files, random_content, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn identical_content_is_stored_once(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let content = random_content();

    write_file(FileSpec::new(dir.path().join("a.txt"), content.clone()));
    write_file(FileSpec::new(dir.path().join("nested/b.txt"), content));

    run_twig_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success()
        .stdout("");
    run_twig_command(dir.path(), &["add", "nested/b.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(count_files(&dir.path().join(".twig").join("blobs")), 1);

    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "=== Staged Files ===\na.txt\nnested/b.txt\n\n",
        ));

    Ok(())
}

#[rstest]
fn adding_committed_version_unstages_file(repository_with_history: TempDir) {
    let dir = repository_with_history;

    write_file(FileSpec::new(dir.path().join("f.txt"), "c".to_string()));
    run_twig_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    write_file(FileSpec::new(dir.path().join("f.txt"), "b".to_string()));
    run_twig_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    run_twig_command(dir.path(), &["commit", "nothing new"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}

#[rstest]
fn adding_removed_file_cancels_removal(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), random_content()));
    twig_add_and_commit(dir.path(), &["a.txt"], "track a");

    let content = std::fs::read_to_string(dir.path().join("a.txt")).unwrap();
    run_twig_command(dir.path(), &["rm", "a.txt"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("a.txt"), content));
    run_twig_command(dir.path(), &["add", "a.txt"])
        .assert()
        .success();

    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Removed Files ===\n\n"))
        .stdout(predicate::str::contains("=== Untracked Files ===\n\n"));
}
