use std::process::ExitCode;

use clap::Parser;
use dpk::cli::key::KeyCommandOutput;
use dpk::cli::{Cli, Commands};
use dpk::error::DpkError;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            tracing::debug!(%error, "command failed");
            let serialized = serde_json::to_string_pretty(&error.to_error_response()).unwrap_or_else(
                |_| {
                    "{\"error\":{\"type\":\"response_serialization_error\",\"message\":\"Failed to serialize error response\"}}"
                        .to_string()
                },
            );
            println!("{serialized}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("DPK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<String, DpkError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Key(args) => match dpk::cli::key::run_key(args)? {
            KeyCommandOutput::Text(output) => Ok(output),
            KeyCommandOutput::Json(response) => serde_json::to_string_pretty(&response)
                .map_err(|source| DpkError::ResponseSerialization { source }),
        },
        Commands::Batch(args) => {
            let response = dpk::cli::batch::run_batch(args)?;
            serde_json::to_string_pretty(&response)
                .map_err(|source| DpkError::ResponseSerialization { source })
        }
    }
}
