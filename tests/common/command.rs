use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_joegit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

pub fn run_joegit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("joegit").expect("Failed to find joegit binary");
    cmd.envs(vec![("NO_COLOR", "1"), ("JOEGIT_LOG", "off")]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run a command that prints a single object ID and return it
pub fn joegit_oid(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_joegit_command(dir, args).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    Ok(stdout.trim().to_string())
}

pub fn joegit_commit(dir: &Path, message: &str) -> Result<String, Box<dyn std::error::Error>> {
    joegit_oid(dir, &["commit", "-m", message])
}
