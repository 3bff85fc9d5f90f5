//! Dialog components for TUI

mod picker_dialog;

pub use picker_dialog::render_picker_dialog;
