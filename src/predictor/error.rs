//! Error taxonomy for a single prediction submission

use thiserror::Error;

/// Local validation failures, detected before any network call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields ({0} is missing)")]
    MissingField(&'static str),

    #[error("Experience years must be a number")]
    InvalidExperience,

    #[error("Experience years must be 0 or greater")]
    NegativeExperience,

    #[error("Number of skills must be 0 or greater")]
    NegativeSkills,

    #[error("Number of skills must be a whole number")]
    FractionalSkills,
}

/// Why a submission did not produce a result
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictionError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Cannot connect to API. Please ensure the backend server is running on {endpoint}")]
    NetworkUnavailable { endpoint: String, reason: String },

    #[error("{message}")]
    ServiceRejected { status: u16, message: String },

    #[error("The prediction service returned an unexpected response")]
    MalformedResponse { reason: String },
}

impl PredictionError {
    /// Short label for the status bar and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::NetworkUnavailable { .. } => "network unavailable",
            Self::ServiceRejected { .. } => "rejected by service",
            Self::MalformedResponse { .. } => "malformed response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_displays_service_message_verbatim() {
        let err = PredictionError::ServiceRejected {
            status: 422,
            message: "Unknown company".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown company");
    }

    #[test]
    fn test_network_error_mentions_endpoint() {
        let err = PredictionError::NetworkUnavailable {
            endpoint: "http://localhost:8000".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("http://localhost:8000"));
        assert!(err.to_string().contains("backend server is running"));
    }

    #[test]
    fn test_validation_converts_and_keeps_message() {
        let err: PredictionError = ValidationError::MissingField("Company").into();
        assert_eq!(err.kind(), "validation");
        assert_eq!(
            err.to_string(),
            "Please fill in all required fields (Company is missing)"
        );
    }

    #[test]
    fn test_kinds_are_distinct() {
        let malformed = PredictionError::MalformedResponse {
            reason: "eof".to_string(),
        };
        let rejected = PredictionError::ServiceRejected {
            status: 500,
            message: "Prediction failed".to_string(),
        };
        assert_ne!(malformed.kind(), rejected.kind());
    }
}
