//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod success;
mod widgets;

use crate::app::App;
use crate::state::{FieldName, View};
use components::render_picker_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    match app.state.current_view() {
        View::Registration => forms::draw_registration(frame, main_area, app),
        View::Success => success::draw(frame, main_area, app),
    }

    if let Some(picker) = &app.state.pending_picker {
        let options = picker.options(app.state.form.values().get(FieldName::Country));
        render_picker_dialog(frame, picker, &options);
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
