//! HTTP-backed prediction service for MLflow-style scoring servers.
//!
//! Readiness is `GET /ping` polled until success or deadline; prediction
//! is `POST /invocations` with the JSON payload as body. Rejections
//! (non-2xx answers) carry the scoring server's error message when the
//! body has one.

use std::thread;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::{PredictionService, ServiceError};

/// Interval between readiness probes.
const PING_INTERVAL: Duration = Duration::from_millis(250);

/// Error body shape the scoring server answers rejections with.
#[derive(Debug, Deserialize)]
struct ScoringError {
    #[serde(default)]
    error_code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// A [`PredictionService`] backed by an HTTP scoring server.
pub struct HttpService {
    base: Url,
    client: Client,
}

impl HttpService {
    /// Create a client for the scoring server rooted at `base`.
    pub fn new(base: Url) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .build()
            .map_err(|err| ServiceError::Transport(err.to_string()))?;
        Ok(Self { base, client })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        self.base
            .join(path)
            .map_err(|err| ServiceError::Transport(err.to_string()))
    }
}

impl PredictionService for HttpService {
    fn start(&self, timeout: Duration) -> Result<(), ServiceError> {
        let url = self.endpoint("ping")?;
        let deadline = Instant::now() + timeout;
        loop {
            match self.client.get(url.clone()).send() {
                Ok(response) if response.status().is_success() => return Ok(()),
                Ok(response) => {
                    debug!(status = %response.status(), "readiness probe refused");
                }
                Err(err) => {
                    debug!(error = %err, "readiness probe failed");
                }
            }
            if Instant::now() >= deadline {
                return Err(ServiceError::NotReady { timeout });
            }
            thread::sleep(PING_INTERVAL);
        }
    }

    fn predict(&self, payload: &Value) -> Result<Value, ServiceError> {
        let url = self.endpoint("invocations")?;
        let response = self
            .client
            .post(url)
            .json(payload)
            .send()
            .map_err(|err| ServiceError::Transport(err.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|err| ServiceError::Transport(err.to_string()))?;

        if !status.is_success() {
            return Err(ServiceError::Rejected(rejection_message(status, &body)));
        }
        serde_json::from_str(&body).map_err(|err| ServiceError::MalformedResponse(err.to_string()))
    }
}

fn rejection_message(status: StatusCode, body: &str) -> String {
    match serde_json::from_str::<ScoringError>(body) {
        Ok(ScoringError {
            message: Some(message),
            error_code: Some(code),
        }) => format!("{status}: {code}: {message}"),
        Ok(ScoringError {
            message: Some(message),
            error_code: None,
        }) => format!("{status}: {message}"),
        _ => format!("{status}: {body}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_message_uses_scoring_error_body() {
        let body = r#"{"error_code": "BAD_REQUEST", "message": "incompatible input"}"#;
        assert_eq!(
            rejection_message(StatusCode::BAD_REQUEST, body),
            "400 Bad Request: BAD_REQUEST: incompatible input"
        );
    }

    #[test]
    fn rejection_message_falls_back_to_raw_body() {
        assert_eq!(
            rejection_message(StatusCode::INTERNAL_SERVER_ERROR, "boom"),
            "500 Internal Server Error: boom"
        );
    }
}
