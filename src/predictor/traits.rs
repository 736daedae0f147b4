//! Trait abstraction for the prediction client to enable mocking in tests

use super::error::PredictionError;
use super::models::{
    ModelInfo, PredictionRequest, PredictionResult, ServiceHealth, SubmissionId,
};
use async_trait::async_trait;

/// Operations against the prediction service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PredictorClientTrait: Send + Sync {
    /// Base URL of the service, used in user-facing messages
    fn base_url(&self) -> String;

    /// Submit one applicant for prediction. Never retries.
    async fn predict(
        &self,
        submission: SubmissionId,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError>;

    /// Check whether the service is up and has a model loaded
    async fn health(&self) -> Result<ServiceHealth, PredictionError>;

    /// Fetch model metadata
    async fn model_info(&self) -> Result<ModelInfo, PredictionError>;
}
