use crate::common::command::{init_repository_dir, run_twig_command};
use crate::common::file::count_files;
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn init_twice_is_rejected(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_twig_command(dir.path(), &["init"])
        .assert()
        .success()
        .stdout("A twig version-control system already exists in the current directory.\n");

    assert_eq!(count_files(&dir.path().join(".twig").join("commits")), 1);

    Ok(())
}
