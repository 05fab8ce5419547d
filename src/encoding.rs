//! Wire encodings for the prediction request payload.
//!
//! The serving endpoint accepts tabular input in two shapes: a list of
//! per-row record mappings (the common scoring format) and a dense
//! row-major matrix of raw values. The fallback policy is the ordered
//! [`PayloadEncoding::FALLBACK_ORDER`] slice rather than control flow, so
//! it can be inspected and tested on its own.

use serde_json::Value;

use crate::data::Frame;

/// A wire format the request frame can be encoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadEncoding {
    /// One `column -> value` mapping per row. Tried first.
    Records,
    /// Row-major 2-d array of raw values, no column names. The fallback.
    Dense,
}

impl PayloadEncoding {
    /// Encodings in the order the step attempts them.
    pub const FALLBACK_ORDER: [PayloadEncoding; 2] =
        [PayloadEncoding::Records, PayloadEncoding::Dense];

    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            PayloadEncoding::Records => "records",
            PayloadEncoding::Dense => "dense",
        }
    }

    /// Encode `frame` into this wire format.
    pub fn encode(self, frame: &Frame) -> Value {
        match self {
            PayloadEncoding::Records => Value::Array(
                frame
                    .to_records()
                    .into_iter()
                    .map(Value::Object)
                    .collect(),
            ),
            PayloadEncoding::Dense => Value::Array(
                frame
                    .to_matrix()
                    .into_iter()
                    .map(Value::Array)
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_frame() -> Frame {
        Frame::new(
            vec!["age".to_owned(), "bmi".to_owned()],
            vec![
                vec![json!(61.0), json!(27.1)],
                vec![json!(48.0), json!(31.4)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn records_come_first_in_fallback_order() {
        assert_eq!(
            PayloadEncoding::FALLBACK_ORDER,
            [PayloadEncoding::Records, PayloadEncoding::Dense]
        );
    }

    #[test]
    fn records_encoding_emits_one_mapping_per_row() {
        let payload = PayloadEncoding::Records.encode(&sample_frame());

        assert_eq!(
            payload,
            json!([
                {"age": 61.0, "bmi": 27.1},
                {"age": 48.0, "bmi": 31.4},
            ])
        );
    }

    #[test]
    fn dense_encoding_emits_raw_rows() {
        let payload = PayloadEncoding::Dense.encode(&sample_frame());

        assert_eq!(payload, json!([[61.0, 27.1], [48.0, 31.4]]));
    }
}
