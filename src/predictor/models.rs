//! Wire types exchanged with the prediction service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifies one submission attempt; sent as `x-request-id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Request body for `POST /predict`. Field names follow the training columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "Companies")]
    pub company: String,
    #[serde(rename = "Job_Title")]
    pub job_title: String,
    #[serde(rename = "Educational_Degree")]
    pub degree: String,
    #[serde(rename = "Experience_Years")]
    pub experience_years: f64,
    #[serde(rename = "Number_of_Skills")]
    pub skill_count: u32,
}

/// Binary selection label returned by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLabel {
    NotSelected,
    Selected,
}

impl SelectionLabel {
    pub fn from_wire(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NotSelected),
            1 => Some(Self::Selected),
            _ => None,
        }
    }

    pub fn as_wire(self) -> u8 {
        match self {
            Self::NotSelected => 0,
            Self::Selected => 1,
        }
    }

    pub fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

/// Raw success body; validated into [`PredictionResult`]
#[derive(Debug, Deserialize)]
pub(super) struct PredictionResponse {
    pub prediction: u8,
    pub probability: Option<f64>,
    pub message: String,
    pub input: PredictionRequest,
}

/// A decoded, successful prediction
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionResult {
    pub predicted_label: SelectionLabel,
    /// Confidence in `[0, 1]`, absent when the model has no probability output
    pub probability: Option<f64>,
    pub display_message: String,
    pub echoed_input: PredictionRequest,
    pub received_at: DateTime<Utc>,
}

/// Export shape, mirrors the service response
#[derive(Debug, Serialize)]
struct ExportedResult<'a> {
    prediction: u8,
    probability: Option<f64>,
    message: &'a str,
    input: &'a PredictionRequest,
}

impl PredictionResult {
    /// Confidence as a percentage with one decimal, e.g. `82.3%`
    pub fn confidence_display(&self) -> Option<String> {
        self.probability.map(|p| format!("{:.1}%", p * 100.0))
    }

    /// One-line summary used for the clipboard
    pub fn summary(&self) -> String {
        match self.confidence_display() {
            Some(confidence) => format!("{} (confidence {confidence})", self.display_message),
            None => self.display_message.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&ExportedResult {
            prediction: self.predicted_label.as_wire(),
            probability: self.probability,
            message: &self.display_message,
            input: &self.echoed_input,
        })
    }

    pub fn to_csv(&self) -> String {
        let probability = self
            .probability
            .map(|p| p.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        format!(
            "Prediction,Probability,Message\n{},{},{}",
            self.predicted_label.as_wire(),
            probability,
            csv_field(&self.display_message)
        )
    }
}

/// Quote a CSV field when it contains a separator, quote or newline
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// `GET /health` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl ServiceHealth {
    pub fn is_ready(&self) -> bool {
        self.status == "healthy" && self.model_loaded
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Preprocessing {
    pub categorical: String,
    pub numerical: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelMetrics {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

/// `GET /model/info` body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelInfo {
    pub model_type: String,
    pub preprocessing: Preprocessing,
    #[serde(default)]
    pub features: Vec<String>,
    pub metrics: ModelMetrics,
    #[serde(default)]
    pub training_samples: u32,
}

impl Default for ModelInfo {
    /// Published figures, shown until the service reports its own
    fn default() -> Self {
        Self {
            model_type: "Random Forest Classifier".to_string(),
            preprocessing: Preprocessing {
                categorical: "OneHotEncoder".to_string(),
                numerical: "StandardScaler".to_string(),
            },
            features: vec![
                "Companies".to_string(),
                "Job_Title".to_string(),
                "Educational Degree".to_string(),
                "Experience_Years".to_string(),
                "Number of Skills".to_string(),
            ],
            metrics: ModelMetrics {
                accuracy: 0.903,
                precision: 0.90,
                recall: 0.90,
                f1_score: 0.90,
            },
            training_samples: 1500,
        }
    }
}
