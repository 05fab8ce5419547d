//! Transient tabular structure built from the input payload.

use serde_json::{Map, Value};

use crate::error::PredictError;

/// A named-column, row-major table of JSON scalar cells.
///
/// `Frame` exists only to re-encode the input into the wire formats the
/// serving endpoint accepts; it is built per call and dropped afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Build a frame from column names and row-major cell values.
    ///
    /// Every row must hold exactly one value per column.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, PredictError> {
        let expected = columns.len();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(PredictError::RaggedRow {
                    row,
                    expected,
                    got: values.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Column names, in input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.num_rows(), self.num_cols())
    }

    /// One `column -> value` mapping per row, in row order.
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Row-major matrix of raw cell values, without column names.
    pub fn to_matrix(&self) -> Vec<Vec<Value>> {
        self.rows.clone()
    }
}
