/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Interactive storefront TUI, or a validated dry run
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

mod tui;

use std::path::PathBuf;
use std::sync::{Arc, Mutex as StdMutex};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::MakeWriterExt;

use bookstore_adapter::BookstoreClient;
use bookstore_storefront::StorefrontConfig;

use crate::tui::{LogBuffer, LogBufferHandle, LogWriterFactory};

#[derive(Parser, Debug)]
#[command(name = "bookstore-storefront", version, about = "Terminal book store with live basket pricing")]
struct Cli {
    /// YAML configuration file; defaults to the per-user config if present
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Overrides api.base_url from the configuration
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Also append logs to this file while the TUI is running
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = StorefrontConfig::load(args.config_path.as_deref())?;
    if let Some(url) = &args.api_url {
        config.api.base_url = url.clone();
    }
    config.validate()?;

    if args.dry_run {
        init_tracing(&args.log_level)?;
        let client = build_client(&config)?;
        info!(
            base_url = %client.base_url(),
            tick_ms = config.ui.tick_ms,
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer: LogBufferHandle =
        Arc::new(StdMutex::new(LogBuffer::new(config.ui.log_buffer_capacity)));
    let _file_guard = init_tui_tracing(&args.log_level, log_buffer.clone(), args.log_file.as_ref())?;

    let client = Arc::new(build_client(&config)?);
    info!(base_url = %client.base_url(), "starting bookstore-storefront");

    tui::run_tui_with_log(&config, client, log_buffer).await
}

fn build_client(config: &StorefrontConfig) -> Result<BookstoreClient> {
    BookstoreClient::with_config_and_base_url(config.client_config(), &config.api.base_url)
        .context("build bookstore client")
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn init_tui_tracing(
    log_level: &str,
    log_buffer: LogBufferHandle,
    log_file: Option<&PathBuf>,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_writer = LogWriterFactory::new(log_buffer);

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(buffer_writer)
            .try_init()
            .map_err(|err| anyhow!(err))
            .context("initialize tracing subscriber")?;
        return Ok(None);
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let (file_writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(buffer_writer.and(file_writer))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(Some(guard))
}
