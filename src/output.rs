//! Coercion of the raw service response into a numeric array.

use ndarray::{ArrayD, IxDyn};
use serde_json::Value;

use crate::error::{json_type_name, PredictError};

/// Key the scoring protocol wraps the returned values under.
const PREDICTIONS_KEY: &str = "predictions";

/// Coerce a decoded JSON response into an n-dimensional `f64` array.
///
/// Accepted shapes: a bare number (0-d), a flat numeric array (1-d), and
/// a rectangular array of numeric arrays (2-d). An object wrapping the
/// values under a `predictions` key is unwrapped first. No further shape
/// invariants are enforced; whatever the service predicted is what the
/// caller gets.
pub fn wrap_prediction(response: &Value) -> Result<ArrayD<f64>, PredictError> {
    let value = match response {
        Value::Object(map) => map.get(PREDICTIONS_KEY).ok_or_else(|| {
            PredictError::InvalidResponse(format!(
                "object response has no '{PREDICTIONS_KEY}' key"
            ))
        })?,
        other => other,
    };

    match value {
        Value::Number(_) => {
            let scalar = as_f64(value)?;
            Ok(ArrayD::from_elem(IxDyn(&[]), scalar))
        }
        Value::Array(items) if items.iter().all(Value::is_number) => {
            let flat = items.iter().map(as_f64).collect::<Result<Vec<_>, _>>()?;
            let len = flat.len();
            ArrayD::from_shape_vec(IxDyn(&[len]), flat)
                .map_err(|err| PredictError::InvalidResponse(err.to_string()))
        }
        Value::Array(items) => {
            let mut flat = Vec::new();
            let mut width = None;
            for (i, item) in items.iter().enumerate() {
                let row = item.as_array().ok_or_else(|| {
                    PredictError::InvalidResponse(format!(
                        "row {i} is {}, expected an array",
                        json_type_name(item)
                    ))
                })?;
                match width {
                    None => width = Some(row.len()),
                    Some(expected) if expected != row.len() => {
                        return Err(PredictError::InvalidResponse(format!(
                            "row {i} has {} values, expected {expected}",
                            row.len()
                        )));
                    }
                    Some(_) => {}
                }
                for cell in row {
                    flat.push(as_f64(cell)?);
                }
            }
            let shape = [items.len(), width.unwrap_or(0)];
            ArrayD::from_shape_vec(IxDyn(&shape), flat)
                .map_err(|err| PredictError::InvalidResponse(err.to_string()))
        }
        other => Err(PredictError::InvalidResponse(format!(
            "expected numeric data, got {}",
            json_type_name(other)
        ))),
    }
}

fn as_f64(value: &Value) -> Result<f64, PredictError> {
    value.as_f64().ok_or_else(|| {
        PredictError::InvalidResponse(format!("{value} is not representable as f64"))
    })
}
