use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use exprpad::client::EvaluatorClient;
use exprpad::config::Config;
use exprpad::{logging, ui};

/// Terminal client for a remote expression evaluator.
#[derive(Debug, Parser)]
#[command(name = "exprpad", version)]
struct Cli {
    /// Override the evaluation service base URL.
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Load configuration from a specific file instead of the default path.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path).context("failed to load configuration")?,
        None => Config::load().context("failed to load configuration")?,
    };

    if let Some(base_url) = cli.base_url {
        config.service.base_url = base_url;
        config.validate().context("invalid --base-url")?;
    }

    let client = EvaluatorClient::new(&config).context("failed to build HTTP client")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    ui::run(client, runtime.handle().clone())?;
    Ok(())
}
