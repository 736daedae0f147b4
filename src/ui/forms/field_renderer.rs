//! Field rendering utilities for forms

use crate::state::FormField;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field using FormField from the domain layer.
/// `hint` is shown in the bottom border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    hint: Option<&str>,
    palette: &Palette,
) {
    let style = if is_active {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.text)
    };

    let display_value = field.display_value();
    let (display_str, style) = if display_value.is_empty() && !is_active {
        ("(empty)".to_string(), palette.hint())
    } else {
        (display_value, style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(display_str, style),
        Span::styled(cursor, Style::default().fg(palette.accent)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(palette.border(is_active));

    if let Some(hint) = hint {
        block = block.title_bottom(Line::from(Span::styled(format!(" {hint} "), palette.hint())));
    }

    frame.render_widget(content.block(block), area);
}
