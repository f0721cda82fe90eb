use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DpkError;
use crate::hash::DigestAlgorithm;

pub const TRIVIAL_PARTITION_KEY: &str = "0";
pub const MAX_PARTITION_KEY_LENGTH: usize = 256;
pub const PARTITION_KEY_FIELD: &str = "partitionKey";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeriverConfig {
    pub trivial_key: String,
    pub max_length: usize,
    pub key_field: String,
    pub digest: DigestAlgorithm,
}

impl Default for DeriverConfig {
    fn default() -> Self {
        Self {
            trivial_key: TRIVIAL_PARTITION_KEY.to_string(),
            max_length: MAX_PARTITION_KEY_LENGTH,
            key_field: PARTITION_KEY_FIELD.to_string(),
            digest: DigestAlgorithm::default(),
        }
    }
}

impl DeriverConfig {
    pub fn load(path: &Path) -> Result<Self, DpkError> {
        let raw = fs::read_to_string(path).map_err(|error| DpkError::io(path, error))?;
        Self::from_toml_str(&raw, &path.display().to_string())
    }

    pub fn from_toml_str(raw: &str, origin: &str) -> Result<Self, DpkError> {
        let config: Self = toml::from_str(raw).map_err(|error| DpkError::InvalidConfig {
            path: origin.to_string(),
            message: error.message().to_string(),
        })?;
        config.validate(origin)?;
        Ok(config)
    }

    pub fn validate(&self, origin: &str) -> Result<(), DpkError> {
        let problem = if self.trivial_key.is_empty() {
            Some("trivial_key must not be empty")
        } else if self.key_field.is_empty() {
            Some("key_field must not be empty")
        } else if self.max_length == 0 {
            Some("max_length must be at least 1")
        } else {
            None
        };

        match problem {
            Some(message) => Err(DpkError::InvalidConfig {
                path: origin.to_string(),
                message: message.to_string(),
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::{DeriverConfig, MAX_PARTITION_KEY_LENGTH, TRIVIAL_PARTITION_KEY};
    use crate::error::DpkError;
    use crate::hash::DigestAlgorithm;

    #[test]
    fn empty_document_yields_defaults() {
        let config = DeriverConfig::from_toml_str("", "inline").expect("empty TOML is valid");
        assert_eq!(config, DeriverConfig::default());
        assert_eq!(config.trivial_key, TRIVIAL_PARTITION_KEY);
        assert_eq!(config.max_length, MAX_PARTITION_KEY_LENGTH);
        assert_eq!(config.key_field, "partitionKey");
        assert_eq!(config.digest, DigestAlgorithm::Sha3_512);
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = DeriverConfig::from_toml_str(
            "max_length = 64\ndigest = \"blake3-512\"\n",
            "inline",
        )
        .expect("partial TOML is valid");
        assert_eq!(config.max_length, 64);
        assert_eq!(config.digest, DigestAlgorithm::Blake3_512);
        assert_eq!(config.trivial_key, TRIVIAL_PARTITION_KEY);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let error = DeriverConfig::from_toml_str("max_len = 10\n", "dpk.toml")
            .expect_err("unknown key should fail");
        assert!(matches!(error, DpkError::InvalidConfig { ref path, .. } if path == "dpk.toml"));
    }

    #[test]
    fn unknown_digest_is_rejected() {
        let error = DeriverConfig::from_toml_str("digest = \"md5\"\n", "dpk.toml")
            .expect_err("unknown digest should fail");
        assert!(matches!(error, DpkError::InvalidConfig { .. }));
    }

    #[test]
    fn empty_trivial_key_fails_validation() {
        let error = DeriverConfig::from_toml_str("trivial_key = \"\"\n", "dpk.toml")
            .expect_err("empty trivial key should fail");
        match error {
            DpkError::InvalidConfig { message, .. } => {
                assert_eq!(message, "trivial_key must not be empty")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn zero_max_length_fails_validation() {
        let error = DeriverConfig::from_toml_str("max_length = 0\n", "dpk.toml")
            .expect_err("zero max length should fail");
        match error {
            DpkError::InvalidConfig { message, .. } => {
                assert_eq!(message, "max_length must be at least 1")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let mut file = NamedTempFile::new().expect("temp config should be created");
        file.write_all(b"key_field = \"shard\"\n")
            .expect("temp config write should succeed");
        let config = DeriverConfig::load(file.path()).expect("config file should load");
        assert_eq!(config.key_field, "shard");

        let missing = file.path().with_extension("missing");
        let error = DeriverConfig::load(&missing).expect_err("missing file should fail");
        assert!(matches!(error, DpkError::Io { .. }));
    }
}
