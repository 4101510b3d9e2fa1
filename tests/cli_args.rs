//! Tests for the binary's command line.

use std::process::Command;
use tempfile::TempDir;

fn yt_summary_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_yt-summary"));
    // Point at a config that does not exist so defaults apply
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"));
    cmd.env_remove("YT_SUMMARY_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--service-url"));
    assert!(stdout.contains("--print"));
    assert!(stdout.contains("--timeout"));
    assert!(stdout.contains("--video-id"));
}

#[test]
fn test_print_with_invalid_url_fails_without_request() {
    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .args(["--print", "not a url"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid YouTube URL"), "stderr: {stderr}");
}

#[test]
fn test_print_with_unreachable_service_shows_generic_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .args(["--service-url", &format!("http://127.0.0.1:{port}")])
        .args(["--print", "https://youtu.be/dQw4w9WgXcQ"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to fetch summary. Please try again."),
        "stderr: {stderr}"
    );
}

#[test]
fn test_invalid_service_url_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .args(["--service-url", "ftp://example.com"])
        .args(["--print", "https://youtu.be/dQw4w9WgXcQ"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid configuration"), "stderr: {stderr}");
}

#[test]
fn test_print_without_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .arg("--print")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("<URL>"), "stderr: {stderr}");
}

#[test]
fn test_video_id_with_wrong_length_is_rejected() {
    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .args(["--video-id", "short"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("exactly 11 characters"), "stderr: {stderr}");
}

#[test]
fn test_video_id_with_unreachable_service_shows_generic_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let dir = TempDir::new().unwrap();
    let output = yt_summary_cmd(&dir)
        .args(["--service-url", &format!("http://127.0.0.1:{port}")])
        .args(["--video-id", "dQw4w9WgXcQ"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to fetch summary. Please try again."),
        "stderr: {stderr}"
    );
}
