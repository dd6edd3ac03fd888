use crate::common::command::{
    find_commit_id, init_repository_dir, repository_with_history, run_twig_command,
    twig_add_and_commit,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use predicates::prelude::*;
use rstest::rstest;

#[rstest]
fn checkout_file_from_head(repository_with_history: TempDir) {
    let dir = repository_with_history;
    write_file(FileSpec::new(dir.path().join("f.txt"), "scratch".to_string()));

    run_twig_command(dir.path(), &["checkout", "--", "f.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.path().join("f.txt")), "b");
}

#[rstest]
#[case(40)]
#[case(8)]
fn checkout_file_from_commit_id(repository_with_history: TempDir, #[case] id_length: usize) {
    let dir = repository_with_history;
    let c1 = find_commit_id(dir.path(), "c1");

    run_twig_command(dir.path(), &["checkout", &c1[..id_length], "--", "f.txt"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.path().join("f.txt")), "a");

    // the restored file is not staged
    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== Staged Files ===\n\n"))
        .stdout(predicate::str::contains("f.txt (modified)\n"));
}

#[rstest]
fn checkout_file_missing_from_commit(repository_with_history: TempDir) {
    let dir = repository_with_history;
    let root = find_commit_id(dir.path(), "initial commit");

    run_twig_command(dir.path(), &["checkout", &root, "--", "f.txt"])
        .assert()
        .success()
        .stdout("File does not exist in that commit.\n");

    assert_eq!(read_file(&dir.path().join("f.txt")), "b");
}

#[rstest]
#[case("0000000")]
#[case("zzzzzzzz")]
#[case("0000000000000000000000000000000000000000")]
fn checkout_file_from_unknown_commit(repository_with_history: TempDir, #[case] commit: &str) {
    run_twig_command(repository_with_history.path(), &["checkout", commit, "--", "f.txt"])
        .assert()
        .success()
        .stdout("No commit with that id exists.\n");
}

#[rstest]
fn checkout_file_keeps_untracked_file_in_the_way(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    write_file(FileSpec::new(dir.path().join("d/f.txt"), "f".to_string()));
    twig_add_and_commit(dir.path(), &["d/f.txt"], "track d/f");

    std::fs::remove_dir_all(dir.path().join("d"))?;
    write_file(FileSpec::new(dir.path().join("d"), "precious untracked".to_string()));

    run_twig_command(dir.path(), &["checkout", "--", "d/f.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("fatal: "));

    assert!(dir.path().join("d").is_file());
    assert_eq!(read_file(&dir.path().join("d")), "precious untracked");

    Ok(())
}
