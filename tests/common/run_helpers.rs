//! Drive the application entry point and capture its streams

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use git_log_searcher::app::startup::{run, RunContext};

pub struct RunOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Run with an explicit argument list, no terminal, and no colour
pub async fn run_app(args: &[&str]) -> RunOutput {
    run_app_with(args, &RunContext::default()).await
}

pub async fn run_app_with(args: &[&str], context: &RunContext) -> RunOutput {
    let mut argv = vec!["git-log-searcher"];
    argv.extend_from_slice(args);

    let (mut out, mut err) = (Vec::new(), Vec::new());
    let code = run(argv, context, &mut out, &mut err).await;

    RunOutput {
        code,
        stdout: String::from_utf8(out).unwrap(),
        stderr: String::from_utf8(err).unwrap(),
    }
}

/// Write a config file listing `directories`; keep the TempDir alive
pub fn write_config(directories: &[&Path]) -> (TempDir, PathBuf) {
    let list = directories
        .iter()
        .map(|d| format!("{:?}", d.display().to_string()))
        .collect::<Vec<_>>()
        .join(", ");
    write_raw_config(&format!("directories = [{}]\n", list))
}

pub fn write_raw_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("git-log-searcher.toml");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Run the built executable so the logger writes to a real stderr
pub fn run_binary(args: &[&str]) -> RunOutput {
    let output = std::process::Command::new(env!("CARGO_BIN_EXE_git-log-searcher"))
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .unwrap();

    RunOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8(output.stdout).unwrap(),
        stderr: String::from_utf8(output.stderr).unwrap(),
    }
}
