use crate::common::command::{init_repository_dir, repository_dir, run_twig_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn no_command_asks_for_one(repository_dir: TempDir) {
    run_twig_command(repository_dir.path(), &[])
        .assert()
        .success()
        .stdout("Please enter a command.\n");
}

#[rstest]
#[case(&["hello"])]
#[case(&["commmit", "message"])]
fn unknown_command_is_rejected(init_repository_dir: TempDir, #[case] args: &[&str]) {
    run_twig_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout("No command with that name exists.\n");
}

#[rstest]
#[case(&["add"])]
#[case(&["add", "a.txt", "b.txt"])]
#[case(&["commit"])]
#[case(&["log", "extra"])]
#[case(&["checkout"])]
#[case(&["checkout", "a", "b"])]
#[case(&["merge"])]
fn incorrect_operands_are_rejected(init_repository_dir: TempDir, #[case] args: &[&str]) {
    run_twig_command(init_repository_dir.path(), args)
        .assert()
        .success()
        .stdout("Incorrect operands.\n");
}

#[rstest]
#[case(&["status"])]
#[case(&["log"])]
#[case(&["branch", "dev"])]
fn commands_outside_repository_are_rejected(repository_dir: TempDir, #[case] args: &[&str]) {
    run_twig_command(repository_dir.path(), args)
        .assert()
        .success()
        .stdout("Not in an initialized twig directory.\n");

    assert!(!repository_dir.path().join(".twig").exists());
}
