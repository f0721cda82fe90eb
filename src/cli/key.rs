use std::path::PathBuf;

use clap::Args;

use crate::cli::input::{build_deriver, parse_event, read_input};
use crate::error::DpkError;
use crate::key::PartitionKey;

#[derive(Debug, Args)]
pub struct KeyArgs {
    #[arg(
        value_name = "EVENT",
        conflicts_with = "file",
        help = "Inline JSON event; omit to read from --file or stdin"
    )]
    pub event: Option<String>,
    #[arg(long, value_name = "PATH", help = "Read the JSON event from a file")]
    pub file: Option<PathBuf>,
    #[arg(long, value_name = "PATH", help = "TOML deriver configuration")]
    pub config: Option<PathBuf>,
    #[arg(long, help = "Emit the key with its source as JSON")]
    pub json: bool,
}

#[derive(Debug)]
pub enum KeyCommandOutput {
    Text(String),
    Json(PartitionKey),
}

pub fn run_key(args: KeyArgs) -> Result<KeyCommandOutput, DpkError> {
    let deriver = build_deriver(args.config.as_ref())?;
    let text = match args.event {
        Some(inline) => inline,
        None => read_input(args.file.as_deref())?,
    };
    let event = parse_event(&text, None)?;
    let key = deriver.derive_detailed(event.as_ref());

    if args.json {
        Ok(KeyCommandOutput::Json(key))
    } else {
        Ok(KeyCommandOutput::Text(key.value))
    }
}
