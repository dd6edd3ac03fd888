use crate::common::command::{
    init_repository_dir, log_commit_ids, repository_with_history, run_twig_command,
    twig_add_and_commit,
};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn find_prints_matching_ids(repository_with_history: TempDir) {
    let dir = repository_with_history;
    let ids = log_commit_ids(dir.path());

    run_twig_command(dir.path(), &["find", "c1"])
        .assert()
        .success()
        .stdout(format!("{}\n", ids[1]));

    run_twig_command(dir.path(), &["find", "initial commit"])
        .assert()
        .success()
        .stdout(format!("{}\n", ids[2]));
}

#[rstest]
fn find_prints_every_commit_sharing_message(init_repository_dir: TempDir) {
    let dir = init_repository_dir;

    write_file(FileSpec::new(dir.path().join("a.txt"), "a\n".to_string()));
    twig_add_and_commit(dir.path(), &["a.txt"], "wip");
    write_file(FileSpec::new(dir.path().join("a.txt"), "b\n".to_string()));
    twig_add_and_commit(dir.path(), &["a.txt"], "wip");

    let mut expected = log_commit_ids(dir.path())[..2].to_vec();
    expected.sort();

    run_twig_command(dir.path(), &["find", "wip"])
        .assert()
        .success()
        .stdout(format!("{}\n{}\n", expected[0], expected[1]));
}

#[rstest]
fn find_unknown_message(repository_with_history: TempDir) {
    run_twig_command(repository_with_history.path(), &["find", "c"])
        .assert()
        .success()
        .stdout("Found no commit with that message.\n");
}
