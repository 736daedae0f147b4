//! Prediction service client module

mod client;
mod error;
mod models;
mod traits;

pub use client::{PredictorClient, DEFAULT_ADDRESS};
pub use error::{PredictionError, ValidationError};
pub use models::{ModelInfo, PredictionRequest, PredictionResult, ServiceHealth, SubmissionId};
pub use traits::PredictorClientTrait;

#[cfg(test)]
pub(crate) use models::{fixtures, SelectionLabel};
#[cfg(test)]
pub use traits::MockPredictorClientTrait;
