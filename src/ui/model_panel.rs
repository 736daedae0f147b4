//! Model details view

use crate::app::App;
use crate::state::{ModelInfoSource, ServiceStatus};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the model details panel
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let info = &app.state.model_info;
    let label = palette.hint();

    let mut content = vec![
        Line::from(Span::styled("Prediction Model", palette.title())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Type: ", label),
            Span::raw(&info.model_type),
        ]),
        Line::from(vec![
            Span::styled("Categorical encoding: ", label),
            Span::raw(&info.preprocessing.categorical),
        ]),
        Line::from(vec![
            Span::styled("Numerical scaling: ", label),
            Span::raw(&info.preprocessing.numerical),
        ]),
        Line::from(vec![
            Span::styled("Training samples: ", label),
            Span::raw(info.training_samples.to_string()),
        ]),
        Line::from(""),
        Line::from(Span::styled("Metrics", Style::default().fg(palette.accent))),
    ];

    for (name, value) in [
        ("Accuracy", info.metrics.accuracy),
        ("Precision", info.metrics.precision),
        ("Recall", info.metrics.recall),
        ("F1 score", info.metrics.f1_score),
    ] {
        content.push(Line::from(vec![
            Span::styled(format!("  {name:<10}"), label),
            Span::raw(format!("{:.1}%", value * 100.0)),
        ]));
    }

    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        "Features",
        Style::default().fg(palette.accent),
    )));
    for feature in &info.features {
        content.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(palette.accent)),
            Span::raw(feature),
        ]));
    }

    content.push(Line::from(""));
    let source = match app.state.model_info_source {
        ModelInfoSource::Service => "Reported by the prediction service",
        ModelInfoSource::Published => "Published figures (service not reachable)",
    };
    content.push(Line::from(Span::styled(source, label)));

    let status_color = match app.state.service_status {
        ServiceStatus::Ready => palette.success,
        ServiceStatus::ModelNotLoaded => palette.warning,
        ServiceStatus::Offline => palette.danger,
        ServiceStatus::Unknown => palette.muted,
    };
    content.push(Line::from(vec![
        Span::styled("Service: ", label),
        Span::styled(
            format!("{} ({})", app.api_url, app.state.service_status.label()),
            Style::default().fg(status_color),
        ),
    ]));

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Model ")
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
