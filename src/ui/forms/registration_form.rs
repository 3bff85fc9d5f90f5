//! Registration form rendering

use super::field_renderer::{draw_field, draw_help_text, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{descriptor, FieldName, InputKind, RegistrationForm, View};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::widgets::scroll_start;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the registration form with its submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let block = Block::default()
        .title(format!(" {} ", View::Registration.title()))
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(FIELD_HEIGHT),     // Fields
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(2),             // Help text
        ])
        .margin(1)
        .split(inner);

    draw_fields(frame, chunks[0], form);

    let submit_area = Rect {
        width: chunks[1].width.min(16),
        ..chunks[1]
    };
    render_button(
        frame,
        submit_area,
        "Submit",
        form.is_submit_focused(),
        form.is_submit_enabled(),
        Some(Color::Green),
    );

    let nav_hint =
        format!("Tab/↑↓: move between fields  Enter: choose  {SUBMIT_SHORTCUT}: submit");
    let toggle_hint = reveal_hint(form);
    draw_help_text(frame, chunks[2], &[nav_hint.as_str(), toggle_hint.as_str()]);
}

/// Draw the window of fields that keeps the focused one visible
fn draw_fields(frame: &mut Frame, area: Rect, form: &RegistrationForm) {
    let fields = form.fields();
    let capacity = (area.height / FIELD_HEIGHT) as usize;
    if capacity == 0 || fields.is_empty() {
        return;
    }

    let focus = form.active_field_index().min(fields.len() - 1);
    let start = scroll_start(focus, capacity);

    for (slot, field) in fields.iter().skip(start).take(capacity).enumerate() {
        let field_area = Rect {
            x: area.x,
            y: area.y + slot as u16 * FIELD_HEIGHT,
            width: area.width,
            height: FIELD_HEIGHT,
        };
        let descriptor = descriptor(*field);
        let view = FieldView {
            descriptor,
            value: form.values().get(*field),
            error: form.errors().message(*field),
            is_active: form.active_field() == Some(*field),
            is_valid: form.is_valid(*field),
            is_masked: form.is_masked(*field),
            placeholder: placeholder(form, *field, descriptor.kind),
        };
        draw_field(frame, field_area, &view);
    }
}

fn placeholder(form: &RegistrationForm, field: FieldName, kind: InputKind) -> &'static str {
    match kind {
        InputKind::RegionPicker if form.values().get(FieldName::Country).is_empty() => {
            "(select a country first)"
        }
        InputKind::CountryPicker | InputKind::RegionPicker => "(press Enter to choose)",
        _ if field == FieldName::Phone => "(digits only)",
        _ => "(empty)",
    }
}

/// Names everything the visibility toggle masks
fn reveal_hint(form: &RegistrationForm) -> String {
    let action = if form.secrets_shown() { "hide" } else { "show" };
    let masked = if form.profile().mask_identity_numbers {
        "password, PAN and Aadhar"
    } else {
        "password"
    };
    format!("{REVEAL_SHORTCUT}: {action} {masked}")
}
