use std::path::Path;

use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum DpkError {
    #[error("Failed to serialize event: {source}")]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse event JSON{}: {source}", line_suffix(.line))]
    InvalidEventJson {
        line: Option<usize>,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read stdin: {source}")]
    StdinRead {
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize response JSON: {source}")]
    ResponseSerialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration in '{path}': {message}")]
    InvalidConfig { path: String, message: String },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|line| format!(" on line {line}")).unwrap_or_default()
}

impl DpkError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        match self {
            Self::Serialization { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "serialization_error".to_string(),
                    message: self.to_string(),
                    suggestion: Some(
                        "Events must be representable as JSON (string map keys, no cycles)"
                            .to_string(),
                    ),
                },
            },
            Self::InvalidEventJson { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "invalid_event".to_string(),
                    message: self.to_string(),
                    suggestion: Some("Pass one JSON value per event".to_string()),
                },
            },
            Self::InvalidRequest { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "invalid_request".to_string(),
                    message: self.to_string(),
                    suggestion: None,
                },
            },
            Self::InvalidConfig { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "invalid_config".to_string(),
                    message: self.to_string(),
                    suggestion: Some(
                        "Known keys: trivial_key, max_length, key_field, digest".to_string(),
                    ),
                },
            },
            Self::Io { .. } | Self::StdinRead { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "io_error".to_string(),
                    message: self.to_string(),
                    suggestion: None,
                },
            },
            Self::ResponseSerialization { .. } => ErrorResponse {
                error: ErrorBody {
                    r#type: "response_serialization_error".to_string(),
                    message: self.to_string(),
                    suggestion: None,
                },
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub r#type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}
