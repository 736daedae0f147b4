//! Application state definitions

use super::submission::PredictionController;
use crate::constraints::ConstraintTable;
use crate::predictor::{ModelInfo, PredictionError, ServiceHealth};
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Predictor,
    ModelDetails,
    Settings,
}

impl View {
    /// Views reachable from the sidebar, in order
    pub const SIDEBAR: [View; 3] = [View::Predictor, View::ModelDetails, View::Settings];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "",
            Self::Predictor => "Predict",
            Self::ModelDetails => "Model",
            Self::Settings => "Settings",
        }
    }
}

/// Reachability of the prediction service as last observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    #[default]
    Unknown,
    Ready,
    /// Service answered but has no model loaded
    ModelNotLoaded,
    Offline,
}

impl ServiceStatus {
    pub fn from_health(health: &Result<ServiceHealth, PredictionError>) -> Self {
        match health {
            Ok(health) if health.is_ready() => Self::Ready,
            Ok(_) => Self::ModelNotLoaded,
            Err(_) => Self::Offline,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unknown => "checking",
            Self::Ready => "online",
            Self::ModelNotLoaded => "model not loaded",
            Self::Offline => "offline",
        }
    }
}

/// Where the figures in the model view come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelInfoSource {
    /// Built-in published figures
    #[default]
    Published,
    /// Reported by the running service
    Service,
}

/// Rows of the settings view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Theme,
    BackgroundAnimation,
}

impl SettingsRow {
    pub const ALL: [SettingsRow; 2] = [SettingsRow::Theme, SettingsRow::BackgroundAnimation];
}

/// Main application state
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Prediction
    pub prediction: PredictionController,

    // Service metadata
    pub service_status: ServiceStatus,
    pub model_info: ModelInfo,
    pub model_info_source: ModelInfoSource,

    // Settings
    pub settings_index: usize,

    // Non-fatal errors shown one at a time in a dialog
    error_queue: VecDeque<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConstraintTable::builtin())
    }
}

impl AppState {
    pub fn new(table: &'static ConstraintTable) -> Self {
        Self {
            current_view: View::default(),
            view_history: Vec::new(),
            prediction: PredictionController::new(table),
            service_status: ServiceStatus::default(),
            model_info: ModelInfo::default(),
            model_info_source: ModelInfoSource::default(),
            settings_index: 0,
            error_queue: VecDeque::new(),
        }
    }

    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Record a health check outcome
    pub fn apply_health(&mut self, health: &Result<ServiceHealth, PredictionError>) {
        self.service_status = ServiceStatus::from_health(health);
    }

    /// Replace published figures with what the service reports.
    /// A failed fetch keeps whatever is shown.
    pub fn apply_model_info(&mut self, info: Result<ModelInfo, PredictionError>) {
        if let Ok(info) = info {
            self.model_info = info;
            self.model_info_source = ModelInfoSource::Service;
        }
    }

    pub fn selected_setting(&self) -> SettingsRow {
        SettingsRow::ALL[self.settings_index.min(SettingsRow::ALL.len() - 1)]
    }

    pub fn next_setting(&mut self) {
        self.settings_index = (self.settings_index + 1) % SettingsRow::ALL.len();
    }

    pub fn prev_setting(&mut self) {
        if self.settings_index == 0 {
            self.settings_index = SettingsRow::ALL.len() - 1;
        } else {
            self.settings_index -= 1;
        }
    }
}
