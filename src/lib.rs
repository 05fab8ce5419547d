//! serving-predictor: a pipeline step for remote model inference.
//!
//! The step receives split-oriented JSON (separate `columns` and `data`
//! arrays), rebuilds it as a tabular frame, and sends it to a deployed
//! model-serving endpoint as a list of per-row record mappings. If the
//! endpoint rejects that encoding, the step retries once with a dense
//! row-major matrix before giving up. The successful response comes back
//! as an [`ndarray::ArrayD<f64>`].
//!
//! # Quick Start
//!
//! ```ignore
//! use serving_predictor::{HttpService, Predictor};
//! use url::Url;
//!
//! let service = HttpService::new(Url::parse("http://localhost:5000/")?)?;
//! let input = r#"{"columns": ["age", "bmi"], "data": [[61.0, 27.1], [48.0, 31.4]]}"#;
//! let prediction = Predictor::run(&service, input)?;
//! ```
//!
//! # Scope
//!
//! Deployment and lifecycle of the endpoint belong to the surrounding
//! pipeline; this crate only invokes it. Any [`PredictionService`]
//! implementation can stand in for [`HttpService`], which is how the test
//! suite exercises the step without a network.

pub mod data;
pub mod encoding;
pub mod error;
pub mod output;
pub mod service;
pub mod step;

pub use data::{Frame, SplitPayload};
pub use encoding::PayloadEncoding;
pub use error::PredictError;
pub use output::wrap_prediction;
#[cfg(feature = "http")]
pub use service::http::HttpService;
pub use service::{PredictionService, ServiceError};
pub use step::Predictor;
