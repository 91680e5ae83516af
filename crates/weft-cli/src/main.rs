//! Weft CLI - annotate product records with extracted attributes.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weft_cli::{AppConfig, Cli, Formatter};
use weft_extractor::{BatchDriver, Extractor};
use weft_llm::MistralProvider;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing (log to stderr, RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Missing credentials end the run before any record is touched
    let config = AppConfig::from_env(cli.config.as_deref())
        .context("Failed to load configuration")?;

    let provider =
        MistralProvider::with_timeout(&config.endpoint, &config.api_key, config.timeout())?;
    tracing::info!(
        "Using model '{}' at {}",
        config.extractor.model,
        provider.endpoint()
    );

    let driver = BatchDriver::new(Extractor::new(provider, config.extractor));
    let report = driver
        .process_file(&cli.input, &cli.output)
        .await
        .with_context(|| format!("Failed to process '{}'", cli.input.display()))?;

    let formatter = Formatter::new(!cli.no_color);
    println!("{}", formatter.report(&report, &cli.output));

    Ok(())
}
