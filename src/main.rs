use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mkfly::cli::SubmitArgs;

/// mkfly - contact form delivery
#[derive(Parser)]
#[command(name = "mkfly")]
#[command(about = "Validate contact requests and forward them to the webhook", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a contact request and send it to the webhook
    Submit(SubmitArgs),
    /// Send a test submission to check webhook connectivity
    TestWebhook,
    /// Print the effective configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let config = mkfly::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    mkfly::observability::init_observability(
        "mkfly",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    let delivered = match cli.command {
        Commands::Submit(args) => mkfly::cli::submit(config, args).await?,
        Commands::TestWebhook => mkfly::cli::test_webhook(config).await?,
        Commands::Check => {
            mkfly::cli::check(&config)?;
            true
        }
    };

    Ok(if delivered {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
