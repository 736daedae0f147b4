//! Settings view

use crate::app::App;
use crate::state::SettingsRow;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the settings panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let selected = app.state.selected_setting();

    let mut content = vec![
        Line::from(Span::styled("Preferences", palette.title())),
        Line::from(""),
    ];

    for row in SettingsRow::ALL {
        let (name, value) = match row {
            SettingsRow::Theme => ("Theme", app.config.theme().label().to_string()),
            SettingsRow::BackgroundAnimation => (
                "Splash animation",
                if app.config.background_animation() {
                    "on".to_string()
                } else {
                    "off".to_string()
                },
            ),
        };

        let is_selected = row == selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let value_style = if is_selected {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };

        content.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(palette.accent)),
            Span::styled(format!("{name:<18}"), palette.hint()),
            Span::styled(value, value_style),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("API URL           ", palette.hint()),
        Span::raw(app.api_url.as_str()),
    ]));
    content.push(Line::from(vec![
        Span::styled("Export directory  ", palette.hint()),
        Span::raw(app.config.export_dir().display().to_string()),
    ]));
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Changes are saved immediately. The splash setting applies on next start.",
        palette.hint(),
    )));

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Settings ")
            .borders(Borders::ALL)
            .border_style(palette.border(true)),
    );

    frame.render_widget(paragraph, area);
}
