//! Field rendering utilities for forms

use crate::state::FieldDescriptor;
use crate::ui::widgets::mask;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered box plus the error line under it
pub const FIELD_HEIGHT: u16 = 4;

/// What to draw for a single field
pub struct FieldView<'a> {
    pub descriptor: &'a FieldDescriptor,
    pub value: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
    /// Validated and passing
    pub is_valid: bool,
    pub is_masked: bool,
    /// Shown in place of an empty value, e.g. a disabled picker
    pub placeholder: &'a str,
}

/// Draw a form field with its inline error message
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let style = if field.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if field.is_active {
        Style::default().fg(Color::Cyan)
    } else if field.is_valid {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = if field.is_masked {
        mask(field.value)
    } else {
        field.value.to_string()
    };

    let value_span = if display_value.is_empty() && !field.is_active {
        Span::styled(field.placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(display_value, style)
    };

    let mut spans = vec![value_span];
    if field.is_active {
        let cursor = if field.descriptor.kind.is_picker() {
            " ▾"
        } else {
            "▌"
        };
        spans.push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(format!(" {} ", field.descriptor.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(message) = field.error {
        let error = Paragraph::new(Line::from(Span::styled(
            format!(" {message}"),
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::ITALIC),
        )));
        frame.render_widget(error, chunks[1]);
    }
}

/// Draw help text lines
pub fn draw_help_text(frame: &mut Frame, area: Rect, lines: &[&str]) {
    let help: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(Span::styled(*l, Style::default().fg(Color::DarkGray))))
        .collect();
    frame.render_widget(Paragraph::new(help), area);
}
