//! JSON interchange
//!
//! A matrix travels as `{"type": "minimat", "data": [...], "columns": c, "rows": r}`.
//! Non-finite elements are written as `null` and read back as NaN.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use serde_json::{json, Value as JsonValue};
use tracing::warn;

use crate::error::{MatError, Result};
use crate::helpers::{extract_dim, extract_numbers, type_name};
use crate::types::Matrix;

/// Value of the `type` field in a matrix record
pub const TYPE_TAG: &str = "minimat";

#[derive(serde::Serialize)]
struct MatrixRecord<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    data: &'a [f64],
    columns: usize,
    rows: usize,
}

impl Matrix {
    /// The matrix as a JSON record
    pub fn json(&self) -> JsonValue {
        json!({
            "type": TYPE_TAG,
            "data": self.data,
            "columns": self.columns,
            "rows": self.rows,
        })
    }

    /// Rebuild a matrix from a JSON record
    ///
    /// A missing or foreign `type` tag only warns. `columns` (or `x_len`) is
    /// required; `rows` (or `y_len`) defaults to 1. Dimensions given as text
    /// are coerced with a warning.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        let record = value.as_object().ok_or_else(|| {
            MatError::type_error(format!("expected a matrix record, got {}", type_name(value)))
        })?;

        match record.get("type").and_then(JsonValue::as_str) {
            Some(TYPE_TAG) => {}
            tag => warn!(?tag, "this JSON does not appear to be a {} record", TYPE_TAG),
        }

        let data = record
            .get("data")
            .ok_or_else(|| MatError::type_error("matrix record has no data"))
            .and_then(|v| extract_numbers(v, "data"))?;

        let columns = match record.get("columns").or_else(|| record.get("x_len")) {
            Some(v) => extract_dim(v, "columns")?,
            None => return Err(MatError::type_error("matrix record has no columns")),
        };
        let rows = match record.get("rows").or_else(|| record.get("y_len")) {
            Some(v) => extract_dim(v, "rows")?,
            None => 1,
        };

        Self::new(data, columns, rows)
    }

    /// Parse a JSON string holding a matrix record
    pub fn from_json_str(s: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(s)?;
        Self::from_json(&value)
    }
}

impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        MatrixRecord {
            kind: TYPE_TAG,
            data: &self.data,
            columns: self.columns,
            rows: self.rows,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Matrix::from_json(&value).map_err(de::Error::custom)
    }
}
