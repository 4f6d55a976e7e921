//! End-to-end search tests

use serial_test::serial;

use crate::common::git_helpers::TestRepo;
use crate::common::run_helpers::{run_app, run_app_with, write_config, write_raw_config};
use git_log_searcher::app::startup::RunContext;
use git_log_searcher::core::shutdown::CancelToken;

#[tokio::test]
#[serial]
async fn test_matches_and_missing_directory() {
    let repo_a = TestRepo::with_commits(&["fix bug", "add feature", "fix bug again"]);
    let ids = repo_a.log_ids();
    let repo_b = repo_a.path().with_file_name("repo-b");
    let (_dir, config) = write_config(&[repo_a.path(), repo_b.as_path()]);

    let output = run_app(&[
        "--config-file",
        config.to_str().unwrap(),
        "--width",
        "80",
        "fix",
    ])
    .await;

    assert_eq!(output.code, 0);
    assert_eq!(
        output.stdout,
        format!(
            "searched `{}`\n{}: fix bug again\n{}: fix bug\n\n",
            repo_a.path().display(),
            ids[0],
            ids[2]
        )
    );
    assert_eq!(
        output.stderr,
        format!(
            "error in `{}`: failed to open repository: directory does not exist\n",
            repo_b.display()
        )
    );
}

#[tokio::test]
#[serial]
async fn test_reports_follow_config_order() {
    let first = TestRepo::with_commits(&["fix first"]);
    let second = TestRepo::with_commits(&["fix second"]);
    let third = TestRepo::with_commits(&["fix third"]);
    let (_dir, config) = write_config(&[third.path(), first.path(), second.path()]);

    let output = run_app(&["-c", config.to_str().unwrap(), "fix"]).await;

    assert_eq!(output.code, 0);
    let headers: Vec<&str> = output
        .stdout
        .lines()
        .filter(|line| line.starts_with("searched"))
        .collect();
    assert_eq!(
        headers,
        vec![
            format!("searched `{}`", third.path().display()),
            format!("searched `{}`", first.path().display()),
            format!("searched `{}`", second.path().display()),
        ]
    );
}

#[tokio::test]
#[serial]
async fn test_pattern_matches_message_body_but_prints_subject() {
    let repo = TestRepo::with_commits(&["tidy up\n\nfixes the crash on startup\n"]);
    let (_dir, config) = write_config(&[repo.path()]);

    let output = run_app(&["-c", config.to_str().unwrap(), "crash"]).await;

    assert_eq!(
        output.stdout,
        format!(
            "searched `{}`\n{}: tidy up\n\n",
            repo.path().display(),
            repo.head()
        )
    );
}

#[tokio::test]
#[serial]
async fn test_long_subject_is_truncated_to_width() {
    let repo = TestRepo::with_commits(&["日本語のコミットメッセージ"]);
    let (_dir, config) = write_config(&[repo.path()]);

    // 46 columns minus a 40 column id leaves 6 for the summary
    let output = run_app(&["-c", config.to_str().unwrap(), "--width", "46", "日本"]).await;

    assert!(
        output
            .stdout
            .contains(&format!("{}: 日本語...\n", repo.head())),
        "got: {}",
        output.stdout
    );
}

#[tokio::test]
#[serial]
async fn test_width_from_config_file() {
    let repo = TestRepo::with_commits(&["abcdefghijklmnop"]);
    let (_dir, config) = write_raw_config(&format!(
        "directories = [{:?}]\nwidth = 50\n",
        repo.path().display().to_string()
    ));

    let output = run_app(&["-c", config.to_str().unwrap(), "abc"]).await;

    assert!(output.stdout.contains(": abcdefg...\n"), "got: {}", output.stdout);
}

#[tokio::test]
#[serial]
async fn test_repository_without_commits_is_reported() {
    let fresh = TestRepo::init();
    let repo = TestRepo::with_commits(&["fix it"]);
    let (_dir, config) = write_config(&[fresh.path(), repo.path()]);

    let output = run_app(&["-c", config.to_str().unwrap(), "fix"]).await;

    assert_eq!(output.code, 0);
    assert!(output
        .stderr
        .starts_with(&format!("error in `{}`: failed to resolve HEAD", fresh.path().display())));
    assert!(output.stdout.contains("fix it"));
}

#[tokio::test]
#[serial]
async fn test_plain_directory_is_reported() {
    let plain = tempfile::TempDir::new().unwrap();
    let (_dir, config) = write_config(&[plain.path()]);

    let output = run_app(&["-c", config.to_str().unwrap(), "fix"]).await;

    assert_eq!(output.code, 0);
    assert!(output.stdout.is_empty());
    assert!(output
        .stderr
        .starts_with(&format!("error in `{}`: failed to open repository", plain.path().display())));
}

#[tokio::test]
#[serial]
async fn test_no_matches_prints_header_only() {
    let repo = TestRepo::with_commits(&["add feature"]);
    let (_dir, config) = write_config(&[repo.path()]);

    let output = run_app(&["-c", config.to_str().unwrap(), "fix"]).await;

    assert_eq!(
        output.stdout,
        format!("searched `{}`\n\n", repo.path().display())
    );
}

#[tokio::test]
#[serial]
async fn test_empty_directory_list() {
    let (_dir, config) = write_config(&[]);

    let output = run_app(&["-c", config.to_str().unwrap(), "fix"]).await;

    assert_eq!(output.code, 0);
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[tokio::test]
#[serial]
async fn test_cancelled_run_exits_130() {
    let repo = TestRepo::with_commits(&["fix bug"]);
    let (_dir, config) = write_config(&[repo.path()]);
    let cancel = CancelToken::new();
    cancel.cancel();
    let context = RunContext {
        cancel,
        ..RunContext::default()
    };

    let output = run_app_with(&["-c", config.to_str().unwrap(), "fix"], &context).await;

    assert_eq!(output.code, 130);
    assert!(output.stderr.contains("scan cancelled"));
}

#[tokio::test]
#[serial]
async fn test_forced_color_output() {
    let repo = TestRepo::with_commits(&["fix bug"]);
    let (_dir, config) = write_config(&[repo.path()]);

    let output = run_app(&["-c", config.to_str().unwrap(), "--color", "fix"]).await;

    assert!(output.stdout.starts_with("\x1b[33msearched"));
    assert!(output.stdout.contains(&format!("\x1b[36m{}\x1b[0m", repo.head())));
}

#[tokio::test]
#[serial]
async fn test_terminal_width_used_when_not_overridden() {
    let repo = TestRepo::with_commits(&["abcdefghijklmnop"]);
    let (_dir, config) = write_config(&[repo.path()]);
    let context = RunContext {
        terminal_width: Some(48),
        ..RunContext::default()
    };

    let output = run_app_with(&["-c", config.to_str().unwrap(), "abc"], &context).await;

    assert!(output.stdout.contains(": abcde...\n"), "got: {}", output.stdout);
}
