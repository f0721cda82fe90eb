use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::DeriverConfig;
use crate::error::DpkError;
use crate::key::KeyDeriver;

pub fn build_deriver(config: Option<&PathBuf>) -> Result<KeyDeriver, DpkError> {
    let config = match config {
        Some(path) => DeriverConfig::load(path)?,
        None => DeriverConfig::default(),
    };
    Ok(KeyDeriver::new(config))
}

pub fn read_input(file: Option<&Path>) -> Result<String, DpkError> {
    match file {
        Some(path) => fs::read_to_string(path).map_err(|error| DpkError::io(path, error)),
        None => read_stdin_text(),
    }
}

fn read_stdin_text() -> Result<String, DpkError> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .map_err(|error| DpkError::StdinRead { source: error })?;
    Ok(input)
}

/// Blank text stands for an absent event.
pub fn parse_event(text: &str, line: Option<usize>) -> Result<Option<Value>, DpkError> {
    if text.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(text)
        .map(Some)
        .map_err(|source| DpkError::InvalidEventJson { line, source })
}
