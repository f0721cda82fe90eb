use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::cli::input::{build_deriver, parse_event, read_input};
use crate::error::DpkError;
use crate::key::{KeyDeriver, KeySource, PartitionKey};

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(
        long,
        value_name = "PATH",
        help = "Newline-delimited JSON events; omit to read stdin"
    )]
    pub file: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "TOML deriver configuration")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub keys: Vec<PartitionKey>,
    pub summary: BatchSummary,
}

#[derive(Debug, Default, Serialize)]
pub struct BatchSummary {
    pub events: usize,
    pub trivial: usize,
    pub hashed: usize,
}

pub fn run_batch(args: BatchArgs) -> Result<BatchResponse, DpkError> {
    let deriver = build_deriver(args.config.as_ref())?;
    let body = read_input(args.file.as_deref())?;
    derive_lines(&deriver, &body)
}

pub fn derive_lines(deriver: &KeyDeriver, body: &str) -> Result<BatchResponse, DpkError> {
    let mut keys = Vec::new();
    let mut summary = BatchSummary::default();

    for (index, line) in body.lines().enumerate() {
        let event = parse_event(line, Some(index + 1))?;
        let key = deriver.derive_detailed(event.as_ref());
        summary.events += 1;
        if key.source == KeySource::Trivial {
            summary.trivial += 1;
        }
        if key.hashed {
            summary.hashed += 1;
        }
        keys.push(key);
    }

    debug!(
        events = summary.events,
        hashed = summary.hashed,
        "derived batch partition keys"
    );
    Ok(BatchResponse { keys, summary })
}
