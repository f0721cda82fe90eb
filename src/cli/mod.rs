use clap::{Parser, Subcommand};

pub mod batch;
pub mod input;
pub mod key;

#[derive(Debug, Parser)]
#[command(name = "dpk")]
#[command(version = crate::version())]
#[command(about = "Deterministic partition keys for JSON events")]
#[command(
    long_about = "Derives a stable partition key from a JSON event: the event's partitionKey field when truthy, otherwise the serialized event, hashed with SHA3-512 when longer than the limit."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(about = "Derive the partition key of a single event")]
    Key(key::KeyArgs),
    #[command(about = "Derive partition keys for newline-delimited JSON events")]
    Batch(batch::BatchArgs),
}
