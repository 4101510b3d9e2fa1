//! Command-line interface.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;
use crate::extractor::VideoId;

#[derive(Debug, Clone, Parser)]
#[command(name = "yt-summary", version, about = "Summarize YouTube videos from the terminal")]
pub struct Cli {
    /// YouTube link to pre-fill (or to summarize with --print)
    #[arg(value_name = "URL")]
    pub url: Option<String>,

    /// Override the summary service origin (e.g. http://localhost:8000)
    #[arg(long, value_name = "URL")]
    pub service_url: Option<String>,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Write logs to this file (also settable with YT_SUMMARY_LOG)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Summarize URL once, print the result and exit without the UI
    #[arg(long, requires = "url")]
    pub print: bool,

    /// Summarize this 11-character video id, print the result and exit
    #[arg(long, value_name = "ID", conflicts_with_all = ["url", "print"])]
    pub video_id: Option<VideoId>,
}

impl Cli {
    /// Apply command-line overrides on top of file configuration.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(service_url) = &self.service_url {
            config.service.base_url = service_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.service.request_timeout_seconds = Some(timeout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_url_and_overrides() {
        let cli = Cli::try_parse_from([
            "yt-summary",
            "https://youtu.be/dQw4w9WgXcQ",
            "--service-url",
            "http://127.0.0.1:9000",
            "--timeout",
            "15",
        ])
        .unwrap();

        assert_eq!(cli.url.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config.service.base_url, "http://127.0.0.1:9000");
        assert_eq!(config.service.request_timeout_seconds, Some(15));
    }

    #[test]
    fn no_overrides_keeps_config() {
        let cli = Cli::try_parse_from(["yt-summary"]).unwrap();
        let mut config = Config::default();
        cli.apply_overrides(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn print_requires_url() {
        assert!(Cli::try_parse_from(["yt-summary", "--print"]).is_err());
        assert!(Cli::try_parse_from(["yt-summary", "--print", "not a url"]).is_ok());
    }

    #[test]
    fn video_id_is_parsed_and_checked() {
        let cli = Cli::try_parse_from(["yt-summary", "--video-id", "dQw4w9WgXcQ"]).unwrap();
        assert_eq!(cli.video_id.map(VideoId::into_inner).as_deref(), Some("dQw4w9WgXcQ"));

        assert!(Cli::try_parse_from(["yt-summary", "--video-id", "short"]).is_err());
        assert!(Cli::try_parse_from([
            "yt-summary",
            "--video-id",
            "dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
        ])
        .is_err());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        assert!(Cli::try_parse_from(["yt-summary", "--timeout", "0"]).is_err());
    }
}
