//! Success view listing the submitted values

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the success view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Form Submitted Successfully!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Submitted Data :",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(""),
    ];

    match &app.state.navigation.submission {
        Some(submission) if !submission.is_empty() => {
            for (field, value) in submission.entries() {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {field}: "),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::raw(value.as_str()),
                ]));
            }
        }
        _ => lines.push(Line::from(Span::styled(
            "  Nothing was submitted",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let block = Block::default()
        .title(format!(" {} ", View::Success.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
