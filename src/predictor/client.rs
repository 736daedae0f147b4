//! HTTP client for the prediction service
//!
//! Translates transport and application failures into [`PredictionError`]:
//! unreachable endpoint, non-2xx status, or a 2xx body that does not decode.

use super::error::PredictionError;
use super::models::{
    ModelInfo, PredictionRequest, PredictionResponse, PredictionResult, SelectionLabel,
    ServiceHealth, SubmissionId,
};
use super::traits::PredictorClientTrait;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Default service address
pub const DEFAULT_ADDRESS: &str = "http://localhost:8000";

/// Generic message when a rejection carries no reason
const GENERIC_REJECTION: &str = "Prediction failed";

/// Client for the prediction service
#[derive(Clone)]
pub struct PredictorClient {
    http: Client,
    base_url: String,
}

impl PredictorClient {
    /// Create a client for the given base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn unreachable(&self, err: reqwest::Error) -> PredictionError {
        warn!(
            endpoint = %self.base_url,
            timeout = err.is_timeout(),
            "Prediction service unreachable: {err}"
        );
        PredictionError::NetworkUnavailable {
            endpoint: self.base_url.clone(),
            reason: err.to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PredictionError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let body = read_success_body(response).await?;
        serde_json::from_slice(&body).map_err(|e| PredictionError::MalformedResponse {
            reason: e.to_string(),
        })
    }
}

#[async_trait]
impl PredictorClientTrait for PredictorClient {
    fn base_url(&self) -> String {
        self.base_url.clone()
    }

    async fn predict(
        &self,
        submission: SubmissionId,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, PredictionError> {
        debug!(%submission, ?request, "Sending prediction request");

        let response = self
            .http
            .post(self.url("/predict"))
            .header("x-request-id", submission.to_string())
            .json(request)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let body = read_success_body(response).await?;
        let result = decode_prediction(&body)?;

        info!(
            %submission,
            label = result.predicted_label.as_wire(),
            probability = ?result.probability,
            "Prediction received"
        );
        Ok(result)
    }

    async fn health(&self) -> Result<ServiceHealth, PredictionError> {
        self.get_json("/health").await
    }

    async fn model_info(&self) -> Result<ModelInfo, PredictionError> {
        self.get_json("/model/info").await
    }
}

/// Return the body of a 2xx response, or the classified rejection
async fn read_success_body(response: Response) -> Result<Vec<u8>, PredictionError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        let err = rejection(status.as_u16(), &body);
        warn!(status = status.as_u16(), "Prediction service rejected request: {err}");
        return Err(err);
    }

    response
        .bytes()
        .await
        .map(|b| b.to_vec())
        .map_err(|e| PredictionError::MalformedResponse {
            reason: format!("failed to read body: {e}"),
        })
}

/// Classify a non-2xx response
pub(crate) fn rejection(status: u16, body: &[u8]) -> PredictionError {
    PredictionError::ServiceRejected {
        status,
        message: rejection_message(body).unwrap_or_else(|| GENERIC_REJECTION.to_string()),
    }
}

/// Extract a human-readable reason from `{detail}` or `{message}`.
///
/// Request validation failures carry `detail` as a list of `{msg}` objects;
/// those are joined.
fn rejection_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;

    match value.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => {
            return Some(detail.clone());
        }
        Some(serde_json::Value::Array(items)) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|m| m.as_str()))
                .collect();
            if !messages.is_empty() {
                return Some(messages.join("; "));
            }
        }
        _ => {}
    }

    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Decode and check a 2xx prediction body
pub(crate) fn decode_prediction(body: &[u8]) -> Result<PredictionResult, PredictionError> {
    let response: PredictionResponse =
        serde_json::from_slice(body).map_err(|e| PredictionError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let predicted_label = SelectionLabel::from_wire(response.prediction).ok_or_else(|| {
        PredictionError::MalformedResponse {
            reason: format!("prediction must be 0 or 1, got {}", response.prediction),
        }
    })?;

    if let Some(p) = response.probability {
        if !(0.0..=1.0).contains(&p) {
            return Err(PredictionError::MalformedResponse {
                reason: format!("probability {p} is outside [0, 1]"),
            });
        }
    }

    Ok(PredictionResult {
        predicted_label,
        probability: response.probability,
        display_message: response.message,
        echoed_input: response.input,
        received_at: Utc::now(),
    })
}
