//! Delimited text loading
//!
//! Text is split on any configured delimiter and each token is read by its
//! leading number. The missing-value marker and `+Infinity` map to NaN;
//! tokens with no leading number are dropped before the length check.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MatError, Result};
use crate::helpers::parse_float_prefix;
use crate::types::Matrix;

/// Options for the text loader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
    /// Characters that separate values
    pub delimiters: Vec<char>,
    /// Token standing for a missing value
    pub missing: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiters: vec![',', '\n'],
            missing: "?".to_string(),
        }
    }
}

impl LoadOptions {
    /// Builder: replace the delimiter set
    pub fn with_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.delimiters = delimiters.into_iter().collect();
        self
    }

    /// Builder: set the missing-value token
    pub fn with_missing(mut self, missing: impl Into<String>) -> Self {
        self.missing = missing.into();
        self
    }

    fn validate(&self) -> Result<()> {
        if self.delimiters.is_empty() {
            return Err(MatError::input_error("at least one delimiter is required"));
        }
        if self.missing.trim().is_empty() {
            return Err(MatError::input_error("missing-value token cannot be blank"));
        }
        Ok(())
    }
}

/// Parse delimited text into a flat numeric sequence
pub fn parse_values(text: &str, options: &LoadOptions) -> Result<Vec<f64>> {
    options.validate()?;

    let missing = options.missing.trim();
    let mut values = Vec::new();
    let (mut tokens, mut dropped, mut absent) = (0usize, 0usize, 0usize);

    for token in text.split(|c: char| options.delimiters.contains(&c)) {
        tokens += 1;
        let token = token.trim();
        if token == missing {
            absent += 1;
            values.push(f64::NAN);
            continue;
        }
        match parse_float_prefix(token) {
            Some(v) if v == f64::INFINITY => {
                absent += 1;
                values.push(f64::NAN);
            }
            Some(v) => values.push(v),
            None => dropped += 1,
        }
    }

    debug!(tokens, dropped, missing = absent, kept = values.len(), "parsed delimited text");
    Ok(values)
}

impl Matrix {
    /// Load a matrix from comma/newline delimited text
    ///
    /// `columns` and `rows` are supplied by the caller, not inferred.
    pub fn from_text(text: &str, columns: usize, rows: usize) -> Result<Self> {
        Self::from_text_with(text, columns, rows, &LoadOptions::default())
    }

    /// Load a matrix from delimited text with custom options
    pub fn from_text_with(text: &str, columns: usize, rows: usize, options: &LoadOptions) -> Result<Self> {
        let values = parse_values(text, options)?;
        Self::new(values, columns, rows)
    }

    /// Read a delimited text file into a matrix
    pub fn load(path: impl AsRef<Path>, columns: usize, rows: usize) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::from_text(&text, columns, rows)
    }
}
