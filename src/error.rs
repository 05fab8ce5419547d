//! Error taxonomy for the predictor step.

use serde_json::Value;

use crate::service::ServiceError;

/// Errors surfaced by [`Predictor::run`](crate::Predictor::run).
///
/// Every variant is fatal to the step: the pipeline runner is expected to
/// surface the message and mark the step failed. The only recovery the
/// step performs is the single encoding fallback, which happens before a
/// [`PredictError::Serving`] is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service did not come up within the readiness wait.
    #[error("prediction service failed to start: {0}")]
    Readiness(#[source] ServiceError),

    /// The input string is not valid JSON.
    #[error("input is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The input parsed, but not to a JSON object.
    #[error("expected a JSON object with 'data' and 'columns' keys, got {0}")]
    NotAnObject(&'static str),

    /// The top-level object lacks `data` or `columns`.
    #[error("expected JSON with 'data' and 'columns' keys, got keys: [{}]", .found.join(", "))]
    MissingKeys { found: Vec<String> },

    /// A required key is present but holds the wrong JSON type.
    #[error("key '{key}' must be {expected}, got {got}")]
    InvalidKey {
        key: &'static str,
        expected: &'static str,
        got: &'static str,
    },

    /// A data row does not match the column count.
    #[error("row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// The service refused every encoding, or failed outright.
    ///
    /// When both encodings were attempted, this wraps the error from the
    /// second (dense) attempt.
    #[error("prediction request failed: {0}")]
    Serving(#[source] ServiceError),

    /// The service answered with something that is not numeric data.
    #[error("cannot interpret response as a numeric array: {0}")]
    InvalidResponse(String),
}

/// Human-readable name of a JSON value's type, for diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_message_names_found_keys() {
        let err = PredictError::MissingKeys {
            found: vec!["rows".to_owned(), "schema".to_owned()],
        };
        assert_eq!(
            err.to_string(),
            "expected JSON with 'data' and 'columns' keys, got keys: [rows, schema]"
        );
    }

    #[test]
    fn ragged_row_message_names_shape() {
        let err = PredictError::RaggedRow {
            row: 3,
            expected: 4,
            got: 2,
        };
        assert_eq!(err.to_string(), "row 3 has 2 values, expected 4");
    }
}
