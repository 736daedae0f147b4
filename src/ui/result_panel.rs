//! Prediction outcome panel

use crate::app::App;
use crate::platform::{COPY_SHORTCUT, SUBMIT_SHORTCUT};
use crate::predictor::{PredictionError, PredictionResult};
use crate::state::SubmissionPhase;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draw the result panel for the current submission phase
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let block = Block::default()
        .title(" Result ")
        .borders(Borders::ALL)
        .border_style(palette.border(false));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match app.state.prediction.phase() {
        SubmissionPhase::Success(result) => draw_success(frame, inner, result, palette),
        SubmissionPhase::Failed(err) => draw_failure(frame, inner, err, palette),
        SubmissionPhase::Submitting(_) => {
            let text = Paragraph::new(Line::from(Span::styled(
                "Predicting...",
                palette.title(),
            )));
            frame.render_widget(text, inner);
        }
        SubmissionPhase::Editing { .. } => draw_placeholder(frame, inner, palette),
    }
}

fn draw_placeholder(frame: &mut Frame, area: Rect, palette: &Palette) {
    let content = vec![
        Line::from(Span::styled("No prediction yet", palette.title())),
        Line::from(""),
        Line::from(Span::styled(
            format!("Fill in every field, then press {SUBMIT_SHORTCUT}."),
            palette.hint(),
        )),
        Line::from(Span::styled(
            "Ctrl+T loads a quick-test applicant.",
            palette.hint(),
        )),
    ];
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), area);
}

/// Headline for a result
pub(crate) fn headline(result: &PredictionResult) -> &'static str {
    if result.predicted_label.is_selected() {
        "✓ Likely to be selected"
    } else {
        "✗ Not likely to be selected"
    }
}

fn draw_success(frame: &mut Frame, area: Rect, result: &PredictionResult, palette: &Palette) {
    let color = if result.predicted_label.is_selected() {
        palette.success
    } else {
        palette.danger
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Headline + message
            Constraint::Length(1), // Confidence gauge
            Constraint::Length(1),
            Constraint::Min(0), // Echoed input
        ])
        .split(area);

    let header = vec![
        Line::from(Span::styled(
            headline(result),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(result.display_message.as_str()),
    ];
    frame.render_widget(Paragraph::new(header).wrap(Wrap { trim: true }), chunks[0]);

    match (result.probability, result.confidence_display()) {
        (Some(probability), Some(label)) => {
            let gauge = Gauge::default()
                .gauge_style(Style::default().fg(color))
                .ratio(probability.clamp(0.0, 1.0))
                .label(format!("Confidence {label}"));
            frame.render_widget(gauge, chunks[1]);
        }
        _ => {
            let text = Paragraph::new(Span::styled("Confidence N/A", palette.hint()));
            frame.render_widget(text, chunks[1]);
        }
    }

    let input = &result.echoed_input;
    let label = palette.hint();
    let details = vec![
        Line::from(vec![Span::styled("Company:    ", label), Span::raw(&input.company)]),
        Line::from(vec![Span::styled("Job title:  ", label), Span::raw(&input.job_title)]),
        Line::from(vec![Span::styled("Degree:     ", label), Span::raw(&input.degree)]),
        Line::from(vec![
            Span::styled("Experience: ", label),
            Span::raw(format!("{} yrs", input.experience_years)),
        ]),
        Line::from(vec![
            Span::styled("Skills:     ", label),
            Span::raw(input.skill_count.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Received:   ", label),
            Span::raw(result.received_at.format("%H:%M:%S UTC").to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("^E:json  ^L:csv  {COPY_SHORTCUT}:copy  Esc:clear"),
            label,
        )),
    ];
    frame.render_widget(Paragraph::new(details), chunks[3]);
}

fn draw_failure(frame: &mut Frame, area: Rect, err: &PredictionError, palette: &Palette) {
    let content = vec![
        Line::from(Span::styled(
            "Prediction failed",
            Style::default()
                .fg(palette.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("({})", err.kind()), palette.hint())),
        Line::from(""),
        Line::from(err.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            format!("Your inputs are kept. Press {SUBMIT_SHORTCUT} to retry."),
            palette.hint(),
        )),
    ];
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::fixtures::selected_result;
    use crate::predictor::SelectionLabel;

    #[test]
    fn test_headline_follows_label() {
        let mut result = selected_result(Some(0.9));
        assert_eq!(headline(&result), "✓ Likely to be selected");
        result.predicted_label = SelectionLabel::NotSelected;
        assert_eq!(headline(&result), "✗ Not likely to be selected");
    }
}
