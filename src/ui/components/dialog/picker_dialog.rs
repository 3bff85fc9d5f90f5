//! Picker dialog - searchable list of countries or regions

use crate::state::PendingPicker;
use crate::ui::widgets::scroll_start;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Number of option rows shown at once
const VISIBLE_OPTIONS: usize = 10;

/// Render the picker overlay centered on the screen
pub fn render_picker_dialog(frame: &mut Frame, picker: &PendingPicker, options: &[&str]) {
    let dialog_width = 50u16;
    let dialog_height = 20u16;

    // Center dialog
    let area = frame.area();
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width.min(area.width),
        height: dialog_height.min(area.height),
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            picker.target.title(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        // Search field
        Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                if picker.search_filter.is_empty() {
                    "type to filter...".to_string()
                } else {
                    picker.search_filter.clone()
                },
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
    ];

    if options.is_empty() {
        content.push(Line::from(Span::styled(
            "  No matches",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        let start_idx = scroll_start(picker.selected_index, VISIBLE_OPTIONS);

        for (idx, option) in options
            .iter()
            .enumerate()
            .skip(start_idx)
            .take(VISIBLE_OPTIONS)
        {
            let is_selected = idx == picker.selected_index;
            let prefix = if is_selected { " ▸ " } else { "   " };
            let style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            content.push(Line::from(Span::styled(format!("{prefix}{option}"), style)));
        }

        let hidden = hidden_below(options.len(), start_idx);
        if hidden > 0 {
            content.push(Line::from(Span::styled(
                format!("   ({hidden} more...)"),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    // Hints
    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::styled(" select  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::styled(" confirm  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" cancel", Style::default().fg(Color::DarkGray)),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::new().bg(Color::Black).fg(Color::White));

    frame.render_widget(dialog, dialog_area);
}

/// Options left below the visible window
fn hidden_below(option_count: usize, start_idx: usize) -> usize {
    option_count.saturating_sub(start_idx + VISIBLE_OPTIONS)
}
