use crate::common::UNTRACKED_IN_THE_WAY;
use crate::common::command::{
    head_commit_id, repository_with_history, run_twig_command, twig_add_and_commit,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn checkout_branch_replaces_working_files(repository_with_history: TempDir) {
    let dir = repository_with_history;

    run_twig_command(dir.path(), &["branch", "b1"])
        .assert()
        .success();
    run_twig_command(dir.path(), &["checkout", "b1"])
        .assert()
        .success()
        .stdout("");

    write_file(FileSpec::new(dir.path().join("f.txt"), "c".to_string()));
    write_file(FileSpec::new(dir.path().join("g.txt"), "g".to_string()));
    twig_add_and_commit(dir.path(), &["f.txt", "g.txt"], "c3");
    let b1_head = head_commit_id(dir.path());

    run_twig_command(dir.path(), &["checkout", "master"])
        .assert()
        .success()
        .stdout("");

    assert_eq!(read_file(&dir.path().join("f.txt")), "b");
    assert!(!dir.path().join("g.txt").exists());

    run_twig_command(dir.path(), &["checkout", "b1"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("f.txt")), "c");
    assert_eq!(read_file(&dir.path().join("g.txt")), "g");
    assert_eq!(head_commit_id(dir.path()), b1_head);
}

#[rstest]
fn checkout_branch_clears_staging_area(repository_with_history: TempDir) {
    let dir = repository_with_history;

    run_twig_command(dir.path(), &["branch", "b1"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("f.txt"), "staged".to_string()));
    run_twig_command(dir.path(), &["add", "f.txt"])
        .assert()
        .success();

    run_twig_command(dir.path(), &["checkout", "b1"])
        .assert()
        .success();

    assert_eq!(read_file(&dir.path().join("f.txt")), "b");
    run_twig_command(dir.path(), &["commit", "nothing"])
        .assert()
        .success()
        .stdout("No changes added to the commit.\n");
}

#[rstest]
fn checkout_branch_refuses_untracked_file(repository_with_history: TempDir) {
    let dir = repository_with_history;

    run_twig_command(dir.path(), &["branch", "b1"])
        .assert()
        .success();
    write_file(FileSpec::new(dir.path().join("loose.txt"), "mine".to_string()));
    write_file(FileSpec::new(dir.path().join("f.txt"), "edited".to_string()));

    run_twig_command(dir.path(), &["checkout", "b1"])
        .assert()
        .success()
        .stdout(UNTRACKED_IN_THE_WAY);

    assert_eq!(read_file(&dir.path().join("loose.txt")), "mine");
    assert_eq!(read_file(&dir.path().join("f.txt")), "edited");
    run_twig_command(dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicates::str::starts_with("=== Branches ===\n*master\nb1\n\n"));
}

#[rstest]
#[case("nope", "No such branch exists.\n")]
#[case("master", "No need to checkout the current branch.\n")]
fn checkout_branch_rejections(
    repository_with_history: TempDir,
    #[case] branch: &str,
    #[case] diagnostic: &str,
) {
    run_twig_command(repository_with_history.path(), &["checkout", branch])
        .assert()
        .success()
        .stdout(diagnostic.to_string());
}
