use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use yt_summary::cli::Cli;
use yt_summary::config::Config;
use yt_summary::headless::{summarize_once, summarize_video};
use yt_summary::logging::init_tracing;
use yt_summary::service::{SummaryClient, SummaryService};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref());

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            tracing::error!(error = %format!("{:#}", err), "fatal error");
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    let client = SummaryClient::new(&config.service).context("Failed to create HTTP client")?;
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    let headless = match (cli.video_id, cli.print) {
        (Some(video_id), _) => Some(runtime.block_on(summarize_video(&client, video_id))),
        (None, true) => {
            let input = cli.url.clone().unwrap_or_default();
            Some(runtime.block_on(summarize_once(&client, &input)))
        }
        (None, false) => None,
    };

    if let Some(result) = headless {
        return match result {
            Ok(summary) => {
                println!("{}", summary);
                Ok(0)
            }
            Err(kind) => {
                eprintln!("{}", kind.message());
                Ok(1)
            }
        };
    }

    let service: Arc<dyn SummaryService> = Arc::new(client);
    yt_summary::ui::run(&config, service, cli.url, runtime.handle().clone())
        .context("Terminal UI failed")?;
    Ok(0)
}
