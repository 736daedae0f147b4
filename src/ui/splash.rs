//! Splash screen rendering with box-drawing logo

use crate::state::SplashState;
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 3] = [
    "╔═╗╔═╗╔═╗╦  ╦╔═╗╔═╗╔╗╔╔╦╗  ╔═╗╦═╗╔═╗╔╦╗╦╔═╗╔╦╗╔═╗╦═╗",
    "╠═╣╠═╝╠═╝║  ║║  ╠═╣║║║ ║   ╠═╝╠╦╝║╣  ║║║║   ║ ║ ║╠╦╝",
    "╩ ╩╩  ╩  ╩═╝╩╚═╝╩ ╩╝╚╝ ╩   ╩  ╩╚═╚═╝═╩╝╩╚═╝ ╩ ╚═╝╩╚═",
];

const TAGLINE: &str = "job applicant selection, predicted";

fn build_logo(palette: &Palette) -> Vec<Line<'static>> {
    let style = Style::default().fg(palette.accent);
    let mut lines: Vec<Line> = LOGO
        .iter()
        .map(|row| Line::from(Span::styled(*row, style)))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(TAGLINE, palette.hint())).centered());
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState, palette: &Palette) {
    let lines = build_logo(palette);

    let logo_height = lines.len() as u16;
    let logo_width = LOGO[0].chars().count() as u16;

    // Centre, shifted up by the scroll offset (may go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    let lines_off_top = if y_pos < area.y as i32 {
        (area.y as i32 - y_pos) as usize
    } else {
        0
    };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < area.y as i32 {
        area.y
    } else {
        y_pos as u16
    };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height),
    };
    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint, only before the scroll starts
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_width = (hint.len() as u16).min(area.width);
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint_width)) / 2,
            y: area.y + area.height - 2,
            width: hint_width,
            height: 1,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(hint, palette.hint()))),
            hint_area,
        );
    }
}
