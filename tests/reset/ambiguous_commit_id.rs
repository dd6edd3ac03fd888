use crate::common::command::{
    head_commit_id, init_repository_dir, log_commit_ids, run_twig_command, twig_add_and_commit,
};
use crate::common::file::{FileSpec, read_file, write_file};
use assert_fs::TempDir;
use rstest::{fixture, rstest};
use std::collections::HashMap;

/// Seventeen commits: at least two of them share their first hex digit
#[fixture]
fn crowded_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let dir = init_repository_dir;

    for n in 0..16 {
        write_file(FileSpec::new(dir.path().join("f.txt"), format!("version {n}\n")));
        twig_add_and_commit(dir.path(), &["f.txt"], &format!("commit {n}"));
    }

    dir
}

fn shared_first_digit(dir: &std::path::Path) -> String {
    let mut counts = HashMap::<char, usize>::new();
    for id in log_commit_ids(dir) {
        let first = id.chars().next().expect("empty commit id");
        *counts.entry(first).or_default() += 1;
    }

    counts
        .into_iter()
        .find(|(_, count)| *count > 1)
        .map(|(digit, _)| digit.to_string())
        .expect("seventeen ids over sixteen digits must collide")
}

#[rstest]
fn reset_to_ambiguous_prefix(crowded_repository_dir: TempDir) {
    let dir = crowded_repository_dir;
    let head = head_commit_id(dir.path());
    let prefix = shared_first_digit(dir.path());

    run_twig_command(dir.path(), &["reset", &prefix])
        .assert()
        .success()
        .stdout(format!("Commit id {prefix} is ambiguous.\n"));

    assert_eq!(head_commit_id(dir.path()), head);
    assert_eq!(read_file(&dir.path().join("f.txt")), "version 15\n");
}

#[rstest]
fn checkout_file_from_ambiguous_prefix(crowded_repository_dir: TempDir) {
    let dir = crowded_repository_dir;
    let prefix = shared_first_digit(dir.path());

    run_twig_command(dir.path(), &["checkout", &prefix, "--", "f.txt"])
        .assert()
        .success()
        .stdout(format!("Commit id {prefix} is ambiguous.\n"));

    assert_eq!(read_file(&dir.path().join("f.txt")), "version 15\n");
}
