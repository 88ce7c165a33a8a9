use crate::common::command::{init_repository_dir, joegit_oid, run_joegit_command};
use assert_fs::TempDir;
use assert_fs::prelude::*;
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::predicate;
use rstest::rstest;

mod common;

const HI_BLOB: &str = "32f95c0d1244a78b2be1bab8de17906fabb2c4a8";
const EMPTY_TREE: &str = "4b825dc642cb6eb9a060e54bf8d69288fbee4904";

#[rstest]
fn hash_object_prints_the_blob_id(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("hi")?;

    run_joegit_command(dir.path(), &["hash-object", "a.txt"])
        .assert()
        .success()
        .stdout(format!("{HI_BLOB}\n"));
    dir.child(format!(".joegit/objects/{}/{}", &HI_BLOB[..2], &HI_BLOB[2..]))
        .assert(predicate::path::missing());

    run_joegit_command(dir.path(), &["hash-object", "-w", "a.txt"])
        .assert()
        .success()
        .stdout(format!("{HI_BLOB}\n"));
    dir.child(format!(".joegit/objects/{}/{}", &HI_BLOB[..2], &HI_BLOB[2..]))
        .assert(predicate::path::is_file());

    Ok(())
}

#[rstest]
fn cat_file_prints_blob_bytes(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let file_name = format!("{}.txt", Word().fake::<String>());
    let file_content = Words(5..10).fake::<Vec<String>>().join(" ");
    dir.child(&file_name).write_str(&file_content)?;

    let blob_oid = joegit_oid(dir.path(), &["hash-object", "-w", &file_name])?;

    run_joegit_command(dir.path(), &["cat-file", &blob_oid])
        .assert()
        .success()
        .stdout(file_content);

    Ok(())
}

#[rstest]
fn write_tree_of_an_empty_directory(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;

    run_joegit_command(dir.path(), &["write-tree"])
        .assert()
        .success()
        .stdout(format!("{EMPTY_TREE}\n"));

    run_joegit_command(dir.path(), &["ls-tree", EMPTY_TREE])
        .assert()
        .success()
        .stdout("");

    Ok(())
}

#[rstest]
fn write_tree_and_list_nested_files(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("hi")?;
    dir.child("sub/deeper/b.txt").write_str("hi")?;

    let tree_oid = joegit_oid(dir.path(), &["write-tree"])?;

    run_joegit_command(dir.path(), &["ls-tree", &tree_oid])
        .assert()
        .success()
        .stdout(format!(
            "blob {HI_BLOB}\ta.txt\nblob {HI_BLOB}\tsub/deeper/b.txt\n"
        ));

    run_joegit_command(dir.path(), &["cat-file", &tree_oid])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("blob {HI_BLOB}\ta.txt")))
        .stdout(predicate::str::contains("tree "));

    Ok(())
}

#[rstest]
fn rev_parse_resolves_names(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    dir.child("a.txt").write_str("hi")?;
    let commit_oid = joegit_oid(dir.path(), &["commit", "-m", "first"])?;

    let uppercase_oid = commit_oid.to_uppercase();
    for name in ["@", "HEAD", commit_oid.as_str(), uppercase_oid.as_str()] {
        run_joegit_command(dir.path(), &["rev-parse", name])
            .assert()
            .success()
            .stdout(format!("{commit_oid}\n"));
    }

    run_joegit_command(dir.path(), &["rev-parse", "no-such-name"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown name: no-such-name"));

    Ok(())
}

#[rstest]
fn cat_file_of_a_missing_object_fails(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir;
    let missing = "0".repeat(40);

    run_joegit_command(dir.path(), &["cat-file", &missing])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!("object {missing} not found")));

    Ok(())
}
