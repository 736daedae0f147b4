//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::predictor::{
    ModelInfo, PredictionError, PredictionResult, PredictorClient, PredictorClientTrait,
    ServiceHealth, SubmissionId,
};
use crate::state::{AppState, SettingsRow, SplashState, SubmitRejected, View, PRESETS};
use anyhow::{anyhow, Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Second Ctrl+C within this window quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(800);

/// Background work that finished, delivered back to the event loop
#[derive(Debug)]
pub enum Completion {
    Prediction {
        id: SubmissionId,
        outcome: Result<PredictionResult, PredictionError>,
    },
    /// `model_info` is only fetched when the health check answered
    ServiceStatus {
        health: Result<ServiceHealth, PredictionError>,
        model_info: Option<Result<ModelInfo, PredictionError>>,
    },
}

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Json => "prediction-result.json",
            Self::Csv => "prediction-result.csv",
        }
    }

    fn render(self, result: &PredictionResult) -> Result<String> {
        match self {
            Self::Json => Ok(result.to_json()?),
            Self::Csv => Ok(result.to_csv()),
        }
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Persisted preferences
    pub config: TuiConfig,
    /// Where `config` is written on change; `None` keeps it in memory
    config_path: Option<PathBuf>,
    /// Prediction service client
    client: Arc<dyn PredictorClientTrait>,
    /// Service address shown to the user
    pub api_url: String,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    /// A service status check is outstanding
    refreshing: bool,
    /// Whether the app should quit
    quit: bool,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// Next preset handed out by Ctrl+T
    preset_cursor: usize,
}

impl App {
    /// Create a new App instance talking to the configured service
    pub fn new(config: TuiConfig, config_path: Option<PathBuf>) -> Result<Self> {
        let api_url = config.api_url();
        let client = PredictorClient::new(&api_url, config.request_timeout())?;
        info!(%api_url, "Using prediction service");

        let mut app = Self::with_client(config, config_path, Arc::new(client));

        if app.config.background_animation() {
            app.state.current_view = View::Splash;
            app.splash_state = Some(SplashState::new());
        }

        app.refresh_service_status();
        Ok(app)
    }

    /// Build an app around any client implementation
    pub fn with_client(
        config: TuiConfig,
        config_path: Option<PathBuf>,
        client: Arc<dyn PredictorClientTrait>,
    ) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            config,
            config_path,
            api_url: client.base_url(),
            client,
            completions_tx,
            completions_rx,
            refreshing: false,
            quit: false,
            status_message: None,
            splash_state: None,
            last_ctrl_c: None,
            preset_cursor: 0,
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.current_view = View::Predictor;
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether background work is outstanding; the event loop polls faster meanwhile
    pub fn is_busy(&self) -> bool {
        !self.state.prediction.can_submit() || self.refreshing
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Re-check service health and, when reachable, model metadata.
    /// Runs in the background; a check already in progress is not repeated.
    pub fn refresh_service_status(&mut self) {
        if self.refreshing {
            return;
        }
        self.refreshing = true;

        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let health = client.health().await;
            let model_info = match &health {
                Ok(health) => {
                    debug!(
                        status = %health.status,
                        model_loaded = health.model_loaded,
                        "Health check"
                    );
                    Some(client.model_info().await)
                }
                Err(err) => {
                    warn!("Health check failed: {err}");
                    None
                }
            };
            // receiver is gone only while shutting down
            let _ = tx.send(Completion::ServiceStatus { health, model_info });
        });
    }

    /// Validate the form and, if it passes, send the request in the background
    pub fn submit(&mut self) {
        let submission = match self.state.prediction.begin_submit() {
            Ok(submission) => submission,
            Err(SubmitRejected::Busy) => {
                self.status_message = Some(SubmitRejected::Busy.to_string());
                return;
            }
            Err(SubmitRejected::Invalid(err)) => {
                debug!("Submission blocked by validation: {err}");
                return;
            }
        };

        let client = Arc::clone(&self.client);
        let tx = self.completions_tx.clone();
        tokio::spawn(async move {
            let outcome = client.predict(submission.id, &submission.request).await;
            // receiver is gone only while shutting down
            let _ = tx.send(Completion::Prediction {
                id: submission.id,
                outcome,
            });
        });
    }

    /// Apply any finished requests. Returns whether anything arrived.
    pub fn poll_completions(&mut self) -> bool {
        let mut received = false;
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.apply_completion(completion);
            received = true;
        }
        received
    }

    fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Prediction { id, outcome } => {
                if let Err(err) = &outcome {
                    warn!(submission = %id, kind = err.kind(), "Prediction failed: {err}");
                }
                self.state.prediction.complete(id, outcome);
            }
            Completion::ServiceStatus { health, model_info } => {
                self.refreshing = false;
                self.state.apply_health(&health);
                if let Some(info) = model_info {
                    if let Err(err) = &info {
                        warn!("Model info unavailable: {err}");
                    }
                    self.state.apply_model_info(info);
                }
            }
        }
    }

    /// Load the next quick-test preset
    pub fn load_next_preset(&mut self) {
        let preset = &PRESETS[self.preset_cursor % PRESETS.len()];
        self.preset_cursor = self.preset_cursor.wrapping_add(1);
        self.state.prediction.load_preset(preset);
        self.status_message = Some(format!("Loaded preset: {}", preset.name));
    }

    /// Write the shown result to the export directory
    pub fn export_result(&mut self, format: ExportFormat) -> Result<PathBuf> {
        let result = self
            .state
            .prediction
            .result()
            .ok_or_else(|| anyhow!("No prediction to export yet"))?;

        let dir = self.config.export_dir();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = dir.join(format.file_name());
        fs::write(&path, format.render(result)?)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), "Exported prediction result");
        Ok(path)
    }

    /// Copy the shown result's summary to the clipboard
    pub fn copy_result(&mut self) -> Result<()> {
        let summary = self
            .state
            .prediction
            .result()
            .map(PredictionResult::summary)
            .ok_or_else(|| anyhow!("No prediction to copy yet"))?;
        copy_to_clipboard(&summary)?;
        self.status_message = Some("Copied result".to_string());
        Ok(())
    }

    fn save_config(&mut self) {
        if let Some(path) = &self.config_path {
            if let Err(err) = self.config.save_to(path) {
                warn!("Failed to save config: {err:#}");
                self.push_error(format!("Failed to save settings: {err:#}"));
            }
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if !self.in_splash() {
            let target = match key.code {
                KeyCode::F(1) => Some(View::Predictor),
                KeyCode::F(2) => Some(View::ModelDetails),
                KeyCode::F(3) => Some(View::Settings),
                _ => None,
            };
            if let Some(view) = target {
                self.navigate(view);
                return Ok(());
            }
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key),
            View::Predictor => self.handle_predictor_key(key),
            View::ModelDetails => self.handle_model_key(key),
            View::Settings => self.handle_settings_key(key),
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) < DOUBLE_TAP_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Navigate to a new view
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        // Each view appears at most once, most recent last
        let previous = self.state.current_view;
        self.state.view_history.retain(|v| *v != previous && *v != view);
        self.state.view_history.push(previous);
        self.state.current_view = view;
    }

    /// Go back to previous view
    pub fn go_back(&mut self) {
        while let Some(view) = self.state.view_history.pop() {
            if view == View::Splash {
                continue;
            }
            self.state.current_view = view;
            return;
        }
    }

    /// Handle keys in Splash screen
    fn handle_splash_key(&mut self, _key: KeyEvent) {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
    }

    /// Handle keys in the prediction form
    fn handle_predictor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            if let Err(err) = self.copy_result() {
                self.push_error(format!("Copy failed: {err:#}"));
            }
            return;
        }

        if ctrl {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('t') => self.load_next_preset(),
                KeyCode::Char('r') => self.refresh_service_status(),
                KeyCode::Char('e') => self.export_and_report(ExportFormat::Json),
                KeyCode::Char('l') => self.export_and_report(ExportFormat::Csv),
                _ => {}
            }
            return;
        }

        let prediction = &mut self.state.prediction;
        match key.code {
            KeyCode::Tab | KeyCode::Down => prediction.next_field(),
            KeyCode::BackTab | KeyCode::Up => prediction.prev_field(),
            KeyCode::Left => {
                prediction.cycle(false);
            }
            KeyCode::Right => {
                prediction.cycle(true);
            }
            KeyCode::Backspace => {
                prediction.backspace();
            }
            KeyCode::Enter if prediction.form().is_submit_row_active() => self.submit(),
            KeyCode::Enter => prediction.next_field(),
            KeyCode::Esc => prediction.dismiss_outcome(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                prediction.input_char(c);
            }
            _ => {}
        }
    }

    fn export_and_report(&mut self, format: ExportFormat) {
        match self.export_result(format) {
            Ok(path) => self.status_message = Some(format!("Saved {}", path.display())),
            Err(err) => self.push_error(format!("Export failed: {err:#}")),
        }
    }

    /// Handle keys in the model details view
    fn handle_model_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('r') => self.refresh_service_status(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Handle keys in the settings view
    fn handle_settings_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => self.state.next_setting(),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => self.state.prev_setting(),
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Left | KeyCode::Right => {
                match self.state.selected_setting() {
                    SettingsRow::Theme => self.config.toggle_theme(),
                    SettingsRow::BackgroundAnimation => self.config.toggle_background_animation(),
                }
                self.save_config();
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Wait for the next background task to finish and apply it
    #[cfg(test)]
    async fn wait_for_completion(&mut self) {
        if let Some(completion) = self.completions_rx.recv().await {
            self.apply_completion(completion);
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::predictor::fixtures::{google_request, selected_result};
    use crate::predictor::{MockPredictorClientTrait, ValidationError};
    use crate::state::{FieldId, SubmissionPhase};
    use tempfile::TempDir;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mock_client() -> MockPredictorClientTrait {
        let mut mock = MockPredictorClientTrait::new();
        mock.expect_base_url()
            .return_const("http://localhost:8000".to_string());
        mock
    }

    fn app_with(mock: MockPredictorClientTrait) -> App {
        App::with_client(TuiConfig::default(), None, Arc::new(mock))
    }

    fn network_error() -> PredictionError {
        PredictionError::NetworkUnavailable {
            endpoint: "http://localhost:8000".to_string(),
            reason: "connection refused".to_string(),
        }
    }

    /// App with the Google preset loaded and a mock answering `predict`
    fn filled_app(
        times: usize,
        outcome: Result<PredictionResult, PredictionError>,
    ) -> App {
        let mut mock = mock_client();
        mock.expect_predict()
            .times(times)
            .returning(move |_, _| outcome.clone());
        let mut app = app_with(mock);
        app.load_next_preset();
        app
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_success_shows_confidence() {
            let mut app = filled_app(1, Ok(selected_result(Some(0.823))));

            app.submit();
            assert!(app.is_busy());
            app.wait_for_completion().await;

            let result = app.state.prediction.result().unwrap();
            assert_eq!(result.confidence_display(), Some("82.3%".to_string()));
            assert!(!app.is_busy());
        }

        #[tokio::test]
        async fn test_request_carries_form_values() {
            let mut mock = mock_client();
            mock.expect_predict()
                .withf(|_, request| *request == google_request())
                .times(1)
                .returning(|_, _| Ok(selected_result(None)));
            let mut app = app_with(mock);
            app.load_next_preset();

            app.submit();
            app.wait_for_completion().await;

            assert!(app.state.prediction.result().is_some());
        }

        #[tokio::test]
        async fn test_network_failure_keeps_fields_and_allows_retry() {
            let mut app = filled_app(2, Err(network_error()));
            let before = app.state.prediction.form().clone();

            app.submit();
            app.wait_for_completion().await;

            assert!(matches!(
                app.state.prediction.phase(),
                SubmissionPhase::Failed(PredictionError::NetworkUnavailable { .. })
            ));
            assert_eq!(app.state.prediction.form(), &before);
            assert!(app
                .state
                .prediction
                .error_message()
                .unwrap()
                .contains("backend server is running"));

            app.submit();
            app.wait_for_completion().await;
        }

        #[tokio::test]
        async fn test_rejection_shows_service_detail() {
            let mut app = filled_app(
                1,
                Err(PredictionError::ServiceRejected {
                    status: 422,
                    message: "Unknown company".to_string(),
                }),
            );

            app.submit();
            app.wait_for_completion().await;

            assert_eq!(
                app.state.prediction.error_message(),
                Some("Unknown company".to_string())
            );
        }

        #[tokio::test]
        async fn test_double_submit_sends_one_request() {
            let mut app = filled_app(1, Ok(selected_result(Some(0.7))));

            app.submit();
            app.submit();

            assert_eq!(
                app.status_message,
                Some("A prediction is already in progress".to_string())
            );
            app.wait_for_completion().await;
            assert!(app.state.prediction.result().is_some());
        }

        #[tokio::test]
        async fn test_empty_form_never_calls_service() {
            let mut mock = mock_client();
            mock.expect_predict().times(0);
            let mut app = app_with(mock);

            app.submit();

            assert_eq!(
                app.state.prediction.phase(),
                &SubmissionPhase::Editing {
                    error: Some(ValidationError::MissingField("Company"))
                }
            );
            assert!(!app.is_busy());
            assert!(!app.poll_completions());
        }

        #[tokio::test]
        async fn test_response_after_edit_is_discarded() {
            let mut app = filled_app(1, Ok(selected_result(Some(0.9))));

            app.submit();
            app.state.prediction.focus(FieldId::Degree);
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            app.wait_for_completion().await;

            assert_eq!(
                app.state.prediction.phase(),
                &SubmissionPhase::Editing { error: None }
            );
            assert!(app.state.prediction.result().is_none());
            assert!(!app.is_busy());
        }
    }

    mod keys {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_typing_fills_active_field() {
            let mut app = app_with(mock_client());
            for c in "Acme".chars() {
                app.handle_key(key(KeyCode::Char(c))).await.unwrap();
            }
            assert_eq!(app.state.prediction.form().company.as_text(), "Acme");
        }

        #[tokio::test]
        async fn test_enter_on_submit_row_submits() {
            let mut app = filled_app(1, Ok(selected_result(Some(0.6))));
            app.state.prediction.focus(FieldId::Submit);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.wait_for_completion().await;

            assert!(app.state.prediction.result().is_some());
        }

        #[tokio::test]
        async fn test_enter_elsewhere_moves_to_next_field() {
            let mut app = app_with(mock_client());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.state.prediction.form().active(), FieldId::JobTitle);
        }

        #[tokio::test]
        async fn test_presets_rotate() {
            let mut app = app_with(mock_client());
            tokio_test::assert_ok!(app.handle_key(ctrl('t')).await);
            tokio_test::assert_ok!(app.handle_key(ctrl('t')).await);
            assert_eq!(app.state.prediction.form().company.as_text(), "Microsoft");
        }

        #[tokio::test]
        async fn test_error_dialog_is_modal() {
            let mut app = app_with(mock_client());
            app.push_error("boom");

            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();
            assert_eq!(app.state.prediction.form().company.as_text(), "");
            assert!(app.state.has_errors());

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.state.has_errors());
        }

        #[tokio::test]
        async fn test_double_ctrl_c_quits() {
            let mut app = app_with(mock_client());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_refresh_updates_status() {
            let mut mock = mock_client();
            mock.expect_health().times(1).returning(|| Err(network_error()));
            mock.expect_model_info().times(0);
            let mut app = app_with(mock);

            app.handle_key(ctrl('r')).await.unwrap();
            app.wait_for_completion().await;

            assert_eq!(
                app.state.service_status,
                crate::state::ServiceStatus::Offline
            );
            assert!(!app.is_busy());
        }

        #[tokio::test]
        async fn test_refresh_runs_in_background_and_is_not_repeated() {
            let mut mock = mock_client();
            mock.expect_health().times(1).returning(|| {
                Ok(ServiceHealth {
                    status: "healthy".to_string(),
                    model_loaded: true,
                })
            });
            mock.expect_model_info()
                .times(1)
                .returning(|| Ok(ModelInfo::default()));
            let mut app = app_with(mock);
            app.navigate(View::ModelDetails);

            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('r'))).await.unwrap();

            // key handling returned before the service answered
            assert_eq!(
                app.state.service_status,
                crate::state::ServiceStatus::Unknown
            );
            assert!(app.is_busy());

            app.wait_for_completion().await;
            assert_eq!(app.state.service_status, crate::state::ServiceStatus::Ready);
            assert_eq!(
                app.state.model_info_source,
                crate::state::ModelInfoSource::Service
            );
            assert!(!app.is_busy());
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_function_keys_switch_views_and_esc_returns() {
            let mut app = app_with(mock_client());
            app.handle_key(key(KeyCode::F(2))).await.unwrap();
            assert_eq!(app.state.current_view, View::ModelDetails);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Predictor);
        }

        #[test]
        fn test_go_back_skips_splash() {
            let mut app = app_with(mock_client());
            app.state.current_view = View::Splash;
            app.navigate(View::Predictor);
            app.navigate(View::Settings);
            app.go_back();
            app.go_back();
            assert_eq!(app.state.current_view, View::Predictor);
        }

        #[tokio::test]
        async fn test_switching_back_and_forth_keeps_history_bounded() {
            let mut app = app_with(mock_client());
            for _ in 0..50 {
                app.handle_key(key(KeyCode::F(2))).await.unwrap();
                app.handle_key(key(KeyCode::F(3))).await.unwrap();
            }
            assert_eq!(app.state.view_history, vec![View::Predictor, View::ModelDetails]);

            app.go_back();
            assert_eq!(app.state.current_view, View::ModelDetails);
            app.go_back();
            assert_eq!(app.state.current_view, View::Predictor);
        }

        #[tokio::test]
        async fn test_any_key_skips_splash() {
            let mut app = app_with(mock_client());
            app.state.current_view = View::Splash;
            app.splash_state = Some(SplashState::new());

            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();

            assert!(app.update_splash(24));
            assert_eq!(app.state.current_view, View::Predictor);
        }
    }

    mod export {
        use super::*;
        use pretty_assertions::assert_eq;

        async fn app_with_result(dir: &TempDir) -> App {
            let mut app = filled_app(1, Ok(selected_result(Some(0.823))));
            app.config.export_dir = Some(dir.path().to_path_buf());
            app.submit();
            app.wait_for_completion().await;
            app
        }

        #[tokio::test]
        async fn test_csv_export_writes_file() {
            let dir = TempDir::new().unwrap();
            let mut app = app_with_result(&dir).await;

            let path = app.export_result(ExportFormat::Csv).unwrap();

            assert_eq!(path, dir.path().join("prediction-result.csv"));
            assert_eq!(
                fs::read_to_string(path).unwrap(),
                "Prediction,Probability,Message\n1,0.823,Selected"
            );
        }

        #[tokio::test]
        async fn test_json_export_via_shortcut() {
            let dir = TempDir::new().unwrap();
            let mut app = app_with_result(&dir).await;

            app.handle_key(ctrl('e')).await.unwrap();

            let json: serde_json::Value = serde_json::from_str(
                &fs::read_to_string(dir.path().join("prediction-result.json")).unwrap(),
            )
            .unwrap();
            assert_eq!(json["probability"], 0.823);
            assert!(app.status_message.unwrap().starts_with("Saved"));
        }

        #[tokio::test]
        async fn test_export_without_result_reports_error() {
            let mut app = app_with(mock_client());
            app.handle_key(ctrl('l')).await.unwrap();
            assert!(app
                .state
                .current_error()
                .unwrap()
                .contains("No prediction to export"));
        }
    }

    mod settings {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_toggle_theme_is_persisted() {
            let dir = TempDir::new().unwrap();
            let path = dir.path().join("config.json");
            let mut app = App::with_client(
                TuiConfig::default(),
                Some(path.clone()),
                Arc::new(mock_client()),
            );
            app.navigate(View::Settings);

            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.config.theme(), Theme::Light);
            assert_eq!(TuiConfig::load_from(&path).unwrap().theme(), Theme::Light);
        }

        #[tokio::test]
        async fn test_toggle_animation() {
            let mut app = app_with(mock_client());
            app.navigate(View::Settings);
            app.handle_key(key(KeyCode::Down)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(!app.config.background_animation());
        }
    }
}
