//! The predictor pipeline step.

use std::time::Duration;

use ndarray::ArrayD;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::data::{Frame, SplitPayload};
use crate::encoding::PayloadEncoding;
use crate::error::PredictError;
use crate::output::wrap_prediction;
use crate::service::{PredictionService, ServiceError};

/// The inference step: decode a split-oriented payload, call the serving
/// endpoint, hand the prediction back as a numeric array.
///
/// Stateless and re-entrant; every [`run`](Predictor::run) call stands on
/// its own. The service handle is owned and sequenced by the surrounding
/// pipeline.
#[derive(Debug, Default, Clone, Copy)]
pub struct Predictor;

impl Predictor {
    /// Bounded wait for the service to become reachable.
    pub const START_TIMEOUT: Duration = Duration::from_secs(10);

    /// Run one inference request against `service`.
    ///
    /// `input_data` must be split-oriented JSON with `data` and `columns`
    /// keys. The record-mapping encoding is sent first; if the endpoint
    /// rejects it, the dense matrix encoding is sent once, and a failure
    /// there is the one reported. Transport failures are never retried —
    /// re-encoding the same rows cannot fix a broken connection.
    pub fn run(
        service: &dyn PredictionService,
        input_data: &str,
    ) -> Result<ArrayD<f64>, PredictError> {
        service
            .start(Self::START_TIMEOUT)
            .map_err(PredictError::Readiness)?;

        let frame = SplitPayload::parse(input_data)?.into_frame()?;
        debug!(
            rows = frame.num_rows(),
            cols = frame.num_cols(),
            columns = ?frame.columns(),
            "decoded input frame"
        );

        let [primary, fallback] = PayloadEncoding::FALLBACK_ORDER;
        let response = match Self::attempt(service, &frame, primary) {
            Ok(response) => response,
            Err(ServiceError::Rejected(reason)) => {
                warn!(
                    encoding = primary.name(),
                    %reason,
                    "encoding rejected, retrying with fallback"
                );
                Self::attempt(service, &frame, fallback).map_err(PredictError::Serving)?
            }
            Err(err) => return Err(PredictError::Serving(err)),
        };

        let prediction = wrap_prediction(&response)?;
        debug!(shape = ?prediction.shape(), "prediction received");
        Ok(prediction)
    }

    fn attempt(
        service: &dyn PredictionService,
        frame: &Frame,
        encoding: PayloadEncoding,
    ) -> Result<Value, ServiceError> {
        let payload = encoding.encode(frame);
        info!(
            encoding = encoding.name(),
            records = frame.num_rows(),
            "sending prediction request"
        );
        service.predict(&payload)
    }
}
