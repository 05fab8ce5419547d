//! The capability contract a deployed prediction service satisfies.

use std::time::Duration;

use serde_json::Value;

#[cfg(feature = "http")]
pub mod http;

/// Errors reported by a [`PredictionService`] implementation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    /// The service did not become reachable within the allowed wait.
    #[error("service not ready after {timeout:?}")]
    NotReady { timeout: Duration },

    /// The endpoint answered but refused the request payload.
    ///
    /// This is the only error class the step treats as recoverable: a
    /// rejection of the records encoding triggers the dense fallback.
    #[error("endpoint rejected payload: {0}")]
    Rejected(String),

    /// The request never produced an answer (connection, DNS, timeout).
    #[error("transport failure: {0}")]
    Transport(String),

    /// The endpoint answered with a body that is not valid JSON.
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
}

/// Minimal capability contract of a deployed model-serving endpoint.
///
/// The deployment component owns construction and lifecycle; the step
/// only ever calls these two operations. One transport-backed
/// implementation ships with the crate (`http::HttpService`); the test
/// suite substitutes scripted stand-ins.
pub trait PredictionService {
    /// Idempotently ensure the service is reachable, blocking up to
    /// `timeout`.
    fn start(&self, timeout: Duration) -> Result<(), ServiceError>;

    /// Send one prediction request and return the decoded JSON response.
    fn predict(&self, payload: &Value) -> Result<Value, ServiceError>;
}
