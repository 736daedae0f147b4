//! Applicant form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::constraints::{Bounds, ConstraintTable};
use crate::state::{format_decimal, FieldId, FormField, PredictionForm, SubmissionPhase};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::result_panel;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// Draw the form with the result panel beside it
pub fn draw_predictor(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(46), // Result panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app, palette);
    result_panel::draw(frame, main_chunks[1], app, palette);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let prediction = &app.state.prediction;
    let form = prediction.form();
    let table = prediction.table();

    let block = Block::default()
        .title(" Applicant ")
        .borders(Borders::ALL)
        .border_style(palette.border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Company
            Constraint::Length(FIELD_HEIGHT),  // Job title
            Constraint::Length(FIELD_HEIGHT),  // Degree
            Constraint::Length(FIELD_HEIGHT),  // Experience
            Constraint::Length(FIELD_HEIGHT),  // Skills
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Inline message
        ])
        .horizontal_margin(1)
        .split(inner);

    let active = form.active();
    for (idx, id) in FieldId::ALL.iter().enumerate() {
        if let Some(field) = form.field(*id) {
            let hint = field_hint(form, *id, table);
            draw_field(frame, chunks[idx], field, active == *id, hint.as_deref(), palette);
        }
    }

    let label = if prediction.is_submitting() {
        "Predicting..."
    } else {
        "Predict"
    };
    render_button(
        frame,
        chunks[5],
        label,
        form.is_submit_row_active(),
        prediction.can_submit(),
        Some(palette.success),
        palette,
    );

    draw_inline_message(frame, chunks[6], app, palette);
}

/// Validation or submission feedback under the submit button
fn draw_inline_message(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let prediction = &app.state.prediction;

    let line = match (prediction.phase(), prediction.error_message()) {
        (SubmissionPhase::Submitting(_), _) => Line::from(Span::styled(
            format!("Asking {} ...", app.api_url),
            palette.hint(),
        )),
        (_, Some(message)) => Line::from(Span::styled(
            message,
            Style::default().fg(palette.danger),
        )),
        _ => return,
    };

    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), area);
}

/// Bottom-border hint for a field under the current selection
pub(crate) fn field_hint(
    form: &PredictionForm,
    id: FieldId,
    table: &ConstraintTable,
) -> Option<String> {
    let company = form.company.as_text();
    let job_title = form.job_title.as_text();

    match id {
        FieldId::Company | FieldId::JobTitle | FieldId::Degree => {
            let options = form.options(id, table);
            let current = form
                .field(id)
                .map(FormField::as_text)
                .unwrap_or_default()
                .trim();
            if !current.is_empty() && !options.contains(&current) {
                Some("not in reference data".to_string())
            } else {
                Some(format!("←/→ {} options", options.len()))
            }
        }
        FieldId::Experience if table.is_constrained(company, job_title) => {
            let range = table.experience_range(company, job_title);
            let outside = form
                .experience
                .as_number()
                .is_some_and(|years| !range.contains(years));
            Some(format!(
                "{}typical {}-{} yrs",
                if outside { "outside " } else { "" },
                format_decimal(range.min),
                format_decimal(range.max)
            ))
        }
        FieldId::Skills if table.is_constrained(company, job_title) => {
            let range = table.skills_range(company, job_title);
            let bounds = Bounds::new(f64::from(range.min), f64::from(range.max));
            let outside = form.skills.as_number().is_some_and(|n| !bounds.contains(n));
            Some(format!(
                "{}typical {}-{}",
                if outside { "outside " } else { "" },
                range.min,
                range.max
            ))
        }
        _ => None,
    }
}
