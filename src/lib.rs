pub mod canonical;
pub mod cli;
pub mod config;
pub mod error;
pub mod hash;
pub mod key;

pub use config::DeriverConfig;
pub use error::DpkError;
pub use key::{
    KeyDeriver, KeySource, PartitionKey, derive_partition_key, derive_partition_key_from,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
