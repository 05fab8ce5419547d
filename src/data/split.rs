//! Split-oriented JSON decoding.
//!
//! The pipeline hands the step a JSON string shaped as
//! `{"columns": [...], "data": [[...], ...]}`. The key-presence check is
//! deliberate and explicit: a payload without both keys fails with a
//! message naming the keys that were actually there, before anything is
//! sent over the wire.

use serde_json::Value;

use crate::data::Frame;
use crate::error::{json_type_name, PredictError};

/// Top-level key holding the row values.
pub const DATA_KEY: &str = "data";
/// Top-level key holding the column names.
pub const COLUMNS_KEY: &str = "columns";

/// The decoded split-oriented input payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitPayload {
    /// Column names, one per field.
    pub columns: Vec<String>,
    /// Row-major cell values.
    pub data: Vec<Vec<Value>>,
}

impl SplitPayload {
    /// Parse and validate a split-oriented JSON string.
    ///
    /// Malformed JSON surfaces as [`PredictError::Parse`]; a missing
    /// `data` or `columns` key as [`PredictError::MissingKeys`].
    pub fn parse(input: &str) -> Result<Self, PredictError> {
        let value: Value = serde_json::from_str(input)?;
        let object = match value {
            Value::Object(map) => map,
            other => return Err(PredictError::NotAnObject(json_type_name(&other))),
        };

        if !object.contains_key(DATA_KEY) || !object.contains_key(COLUMNS_KEY) {
            return Err(PredictError::MissingKeys {
                found: object.keys().cloned().collect(),
            });
        }

        let columns = string_array(COLUMNS_KEY, &object[COLUMNS_KEY])?;
        let data = row_array(DATA_KEY, &object[DATA_KEY])?;
        Ok(Self { columns, data })
    }

    /// Convert into a [`Frame`], validating that rows match the columns.
    pub fn into_frame(self) -> Result<Frame, PredictError> {
        Frame::new(self.columns, self.data)
    }
}

fn string_array(key: &'static str, value: &Value) -> Result<Vec<String>, PredictError> {
    let items = value.as_array().ok_or(PredictError::InvalidKey {
        key,
        expected: "an array of strings",
        got: json_type_name(value),
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_owned)
                .ok_or(PredictError::InvalidKey {
                    key,
                    expected: "an array of strings",
                    got: json_type_name(item),
                })
        })
        .collect()
}

fn row_array(key: &'static str, value: &Value) -> Result<Vec<Vec<Value>>, PredictError> {
    let items = value.as_array().ok_or(PredictError::InvalidKey {
        key,
        expected: "an array of rows",
        got: json_type_name(value),
    })?;
    items
        .iter()
        .map(|item| {
            item.as_array()
                .map(Clone::clone)
                .ok_or(PredictError::InvalidKey {
                    key,
                    expected: "an array of rows",
                    got: json_type_name(item),
                })
        })
        .collect()
}
