//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod model_panel;
mod result_panel;
mod settings_panel;
mod splash;
mod theme;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};
use theme::Palette;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_theme(app.config.theme());

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.text)),
        area,
    );

    if let (View::Splash, Some(splash_state)) = (app.state.current_view, &app.splash_state) {
        splash::draw(frame, area, splash_state, &palette);
        return;
    }

    let (sidebar_area, main_area) = layout::create_layout(area);
    layout::draw_sidebar(frame, sidebar_area, app, &palette);

    match app.state.current_view {
        View::Splash | View::Predictor => forms::draw_predictor(frame, main_area, app, &palette),
        View::ModelDetails => model_panel::draw(frame, main_area, app, &palette),
        View::Settings => settings_panel::draw(frame, main_area, app, &palette),
    }

    layout::draw_status_bar(frame, app, &palette);

    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message, &palette);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Theme, TuiConfig};
    use crate::predictor::fixtures::selected_result;
    use crate::predictor::MockPredictorClientTrait;
    use crate::state::SplashState;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn app() -> App {
        let mut mock = MockPredictorClientTrait::new();
        mock.expect_base_url()
            .return_const("http://localhost:8000".to_string());
        App::with_client(TuiConfig::default(), None, Arc::new(mock))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_predictor_view_shows_form_fields() {
        let screen = render(&app());
        assert!(screen.contains("Company"));
        assert!(screen.contains("Number of Skills"));
        assert!(screen.contains("No prediction yet"));
    }

    #[test]
    fn test_success_shows_confidence() {
        let mut app = app();
        app.load_next_preset();
        let submission = app.state.prediction.begin_submit().unwrap();
        app.state
            .prediction
            .complete(submission.id, Ok(selected_result(Some(0.823))));

        let screen = render(&app);
        assert!(screen.contains("Likely to be selected"));
        assert!(screen.contains("82.3%"));
    }

    #[test]
    fn test_error_dialog_overlays() {
        let mut app = app();
        app.push_error("Export failed");
        let screen = render(&app);
        assert!(screen.contains("Export failed"));
        assert!(screen.contains("to dismiss"));
    }

    #[test]
    fn test_other_views_render() {
        let mut app = app();
        app.config.theme = Some(Theme::Light);

        app.navigate(View::ModelDetails);
        assert!(render(&app).contains("Random Forest"));

        app.navigate(View::Settings);
        assert!(render(&app).contains("Splash animation"));

        app.state.current_view = View::Splash;
        app.splash_state = Some(SplashState::new());
        assert!(render(&app).contains("Press any key to skip"));
    }
}
