//! Button component for TUI

use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border.
///
/// `fill` colours the label of an enabled, unselected button.
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    fill: Option<Color>,
    palette: &Palette,
) {
    let border_style = palette.border(is_selected && is_enabled);

    let text_style = if !is_enabled {
        Style::default().fg(palette.muted)
    } else if is_selected {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(fill.unwrap_or(palette.text))
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a sidebar button with key and label
pub fn render_sidebar_button(
    frame: &mut Frame,
    area: Rect,
    key: &str,
    label: &str,
    is_selected: bool,
    palette: &Palette,
) {
    let content = format!("{key} {label}");
    render_button(frame, area, &content, is_selected, true, None, palette);
}
