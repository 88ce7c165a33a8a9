use crate::common::command::{init_repository_dir, joegit_commit, joegit_oid, run_joegit_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

#[rstest]
fn commits_chain_through_head(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("one")?;
    let tree_oid = joegit_oid(dir.path(), &["write-tree"])?;
    let first = joegit_commit(dir.path(), "first")?;

    run_joegit_command(dir.path(), &["cat-file", &first])
        .assert()
        .success()
        .stdout(format!("tree {tree_oid}\n\nfirst\n"));

    dir.child("a.txt").write_str("two")?;
    let second = joegit_commit(dir.path(), "second")?;

    run_joegit_command(dir.path(), &["cat-file", &second])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("parent {first}\n")));
    assert_eq!(
        std::fs::read_to_string(dir.child(".joegit/HEAD").path())?,
        format!("{second}\n")
    );

    Ok(())
}

#[rstest]
fn log_shows_history_with_decorations(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let message = Words(3..6).fake::<Vec<String>>().join(" ");
    dir.child("a.txt").write_str("one")?;
    let first = joegit_commit(dir.path(), &message)?;
    run_joegit_command(dir.path(), &["tag", "v1"]).assert().success();
    dir.child("a.txt").write_str("two")?;
    let second = joegit_commit(dir.path(), "second\n\nwith a body")?;

    run_joegit_command(dir.path(), &["log"])
        .assert()
        .success()
        .stdout(format!(
            "commit {second} (HEAD)\n\n    second\n    \n    with a body\n\ncommit {first} (tag: v1)\n\n    {message}\n\n"
        ));

    run_joegit_command(dir.path(), &["log", "v1"])
        .assert()
        .success()
        .stdout(format!("commit {first} (tag: v1)\n\n    {message}\n\n"));

    Ok(())
}

#[rstest]
fn log_of_an_unknown_name_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_joegit_command(init_repository_dir.path(), &["log", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown name: nope"));

    Ok(())
}

#[rstest]
fn tags_are_listed_and_resolved(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("one")?;
    let first = joegit_commit(dir.path(), "first")?;
    dir.child("a.txt").write_str("two")?;
    let second = joegit_commit(dir.path(), "second")?;

    run_joegit_command(dir.path(), &["tag", "old", &first]).assert().success();
    run_joegit_command(dir.path(), &["tag", "new"]).assert().success();

    run_joegit_command(dir.path(), &["tag"])
        .assert()
        .success()
        .stdout("new\nold\n");
    run_joegit_command(dir.path(), &["rev-parse", "old"])
        .assert()
        .success()
        .stdout(format!("{first}\n"));
    run_joegit_command(dir.path(), &["rev-parse", "refs/tags/new"])
        .assert()
        .success()
        .stdout(format!("{second}\n"));

    run_joegit_command(dir.path(), &["tag", "bad..name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid ref name"));

    Ok(())
}

#[rstest]
fn checkout_by_tag_restores_the_snapshot(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("one")?;
    let first = joegit_commit(dir.path(), "first")?;
    run_joegit_command(dir.path(), &["tag", "v1"]).assert().success();
    dir.child("a.txt").write_str("two")?;
    dir.child("dir/b.txt").write_str("b")?;
    let second = joegit_commit(dir.path(), "second")?;
    dir.child("a.txt").write_str("uncommitted")?;

    run_joegit_command(dir.path(), &["checkout", "v1"])
        .assert()
        .success();

    dir.child("a.txt").assert("one");
    dir.child("dir").assert(predicate::path::missing());
    assert_eq!(
        std::fs::read_to_string(dir.child(".joegit/HEAD").path())?,
        format!("{first}\n")
    );

    run_joegit_command(dir.path(), &["checkout", &second])
        .assert()
        .success();

    dir.child("a.txt").assert("two");
    dir.child("dir/b.txt").assert("b");

    Ok(())
}

#[rstest]
fn read_tree_by_name(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("one")?;
    let tree_oid = joegit_oid(dir.path(), &["write-tree"])?;
    dir.child("a.txt").write_str("changed")?;
    dir.child("b.txt").write_str("new")?;

    run_joegit_command(dir.path(), &["read-tree", &tree_oid])
        .assert()
        .success();

    dir.child("a.txt").assert("one");
    dir.child("b.txt").assert(predicate::path::missing());

    Ok(())
}
