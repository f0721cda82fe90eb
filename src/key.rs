use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::canonical::to_canonical_json;
use crate::config::DeriverConfig;
use crate::error::DpkError;
use crate::hash::digest_text;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeySource {
    /// The event was absent or falsy.
    Trivial,
    /// Taken from the event's partition key field.
    Field,
    /// The whole event, serialized.
    Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartitionKey {
    pub value: String,
    pub source: KeySource,
    pub hashed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct KeyDeriver {
    config: DeriverConfig,
}

impl KeyDeriver {
    pub fn new(config: DeriverConfig) -> Self {
        Self { config }
    }

    pub fn derive(&self, event: Option<&Value>) -> String {
        self.derive_detailed(event).value
    }

    pub fn derive_serializable<T>(&self, event: Option<&T>) -> Result<String, DpkError>
    where
        T: Serialize + ?Sized,
    {
        let event = event
            .map(serde_json::to_value)
            .transpose()
            .map_err(|source| DpkError::Serialization { source })?;
        Ok(self.derive(event.as_ref()))
    }

    pub fn derive_detailed(&self, event: Option<&Value>) -> PartitionKey {
        let Some(event) = event.filter(|event| is_truthy(event)) else {
            trace!("no event given, using trivial partition key");
            return PartitionKey {
                value: self.config.trivial_key.clone(),
                source: KeySource::Trivial,
                hashed: false,
            };
        };

        let field = event
            .as_object()
            .and_then(|fields| fields.get(&self.config.key_field))
            .filter(|value| is_truthy(value));

        let (candidate, source) = match field {
            Some(Value::String(text)) => (text.clone(), KeySource::Field),
            Some(value) => (to_canonical_json(value), KeySource::Field),
            None => (to_canonical_json(event), KeySource::Event),
        };
        trace!(?source, "selected partition key candidate");

        let length = key_length(&candidate);
        if length > self.config.max_length {
            debug!(
                length,
                max_length = self.config.max_length,
                digest = self.config.digest.name(),
                "partition key candidate too long, hashing"
            );
            return PartitionKey {
                value: digest_text(self.config.digest, &candidate),
                source,
                hashed: true,
            };
        }

        PartitionKey {
            value: candidate,
            source,
            hashed: false,
        }
    }
}

pub fn derive_partition_key(event: Option<&Value>) -> String {
    KeyDeriver::default().derive(event)
}

pub fn derive_partition_key_from<T>(event: Option<&T>) -> Result<String, DpkError>
where
    T: Serialize + ?Sized,
{
    KeyDeriver::default().derive_serializable(event)
}

/// JavaScript truthiness over JSON values. NaN has no JSON form; serde_json
/// maps it to `null`, which is falsy here as well.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Key length in UTF-16 code units, the unit downstream JavaScript consumers
/// compare against.
pub fn key_length(key: &str) -> usize {
    key.encode_utf16().count()
}
