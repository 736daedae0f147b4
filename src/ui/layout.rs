//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{ServiceStatus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the sidebar with boxed buttons
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(View::SIDEBAR.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::SIDEBAR.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &format!("F{}", idx + 1),
            view.title(),
            app.state.current_view == *view,
            palette,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![];

    // Connection status
    let (symbol, color) = match app.state.service_status {
        ServiceStatus::Ready => (" ● ", palette.success),
        ServiceStatus::ModelNotLoaded => (" ◐ ", palette.warning),
        ServiceStatus::Offline => (" ○ ", palette.danger),
        ServiceStatus::Unknown => (" ○ ", palette.status_text),
    };
    spans.push(Span::styled(symbol, Style::default().fg(color)));

    let hints = get_view_hints(app.state.current_view);
    spans.push(Span::styled(hints, Style::default().fg(palette.status_text)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(palette.success)));
    }

    let quit_hint = " ^C^C:quit ";

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(palette.status_bar).fg(palette.status_text));
    frame.render_widget(status, status_area);

    let quit_width = (quit_hint.len() as u16).min(area.width);
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: status_area.y,
        width: quit_width,
        height: 1,
    };
    let quit_widget = Paragraph::new(quit_hint)
        .style(Style::default().bg(palette.status_bar).fg(palette.status_text));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: View) -> String {
    match view {
        View::Splash => "Press any key to skip".to_string(),
        View::Predictor => format!(
            "Tab:next  ←/→:choose  {}:predict  ^T:preset  ^R:refresh  F2:model  F3:settings",
            SUBMIT_SHORTCUT.replace("Ctrl+", "^")
        ),
        View::ModelDetails => "r:refresh  Esc:back".to_string(),
        View::Settings => "j/k:move  Enter:toggle  Esc:back".to_string(),
    }
}
