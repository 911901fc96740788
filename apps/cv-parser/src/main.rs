mod cli;
mod config;
mod cv;
mod errors;
mod extraction;
mod llm_client;
mod output;
mod pipeline;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::pipeline::{RunOptions, RunOutcome};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(outcome) if outcome.is_success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<RunOutcome, AppError> {
    // Load configuration first (fails fast on a missing API key)
    let config = Config::from_env()?;

    // Initialize structured logging; stdout carries the JSON record
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting cv-parser v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let options = RunOptions {
        input: cli.input,
        output: cli.output,
        save: !cli.no_save,
    };

    let outcome = pipeline::run(&options, &llm, &mut std::io::stdout()).await?;
    info!(?outcome, "Done");
    Ok(outcome)
}
