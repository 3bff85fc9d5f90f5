//! Application state and core logic

use crate::platform;
use crate::state::{
    descriptor, AppState, FieldName, FormCommand, FormProfile, PendingPicker, PickerTarget,
    SubmitOutcome, View,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(profile: FormProfile) -> Self {
        Self {
            state: AppState::new(profile),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press in the current view
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Picker dialog is modal
        if self.state.pending_picker.is_some() {
            self.handle_picker_key(key);
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        match self.state.current_view() {
            View::Registration => self.handle_registration_key(key),
            View::Success => self.handle_success_key(key),
        }
        Ok(())
    }

    /// Handle keys in the Registration view
    fn handle_registration_key(&mut self, key: KeyEvent) {
        let on_submit = self.state.form.is_submit_focused();
        let active = self.state.form.active_field();

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.focus_prev(),
            KeyCode::End => self.state.form.focus_submit(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if platform::is_shortcut(&key) => self.submit(),
            KeyCode::Char('t') if platform::is_shortcut(&key) => {
                self.state.form.toggle_secret_visibility()
            }
            KeyCode::Char(_) if platform::is_shortcut(&key) => {}
            KeyCode::Enter if on_submit => self.submit(),
            KeyCode::Enter => match active {
                Some(field) if descriptor(field).kind.is_picker() => self.open_picker(field),
                _ => self.state.form.focus_next(),
            },
            KeyCode::Char(c) => {
                if let Some(field) = active {
                    self.input_char(field, c);
                }
            }
            KeyCode::Backspace | KeyCode::Delete => {
                if let Some(field) = active {
                    self.input_backspace(field);
                }
            }
            _ => {}
        }
    }

    /// Typed characters go into text fields; on a picker they open it with a filter
    fn input_char(&mut self, field: FieldName, c: char) {
        if descriptor(field).kind.is_picker() {
            self.open_picker(field);
            if let Some(ref mut picker) = self.state.pending_picker {
                picker.push_filter(c);
            }
            return;
        }
        let mut value = self.state.form.values().get(field).to_string();
        value.push(c);
        self.state
            .form
            .dispatch(FormCommand::for_input(field, value));
    }

    /// Remove the last character; on a picker this clears the selection
    fn input_backspace(&mut self, field: FieldName) {
        let mut value = self.state.form.values().get(field).to_string();
        if descriptor(field).kind.is_picker() {
            value.clear();
        } else {
            value.pop();
        }
        self.state
            .form
            .dispatch(FormCommand::for_input(field, value));
    }

    fn open_picker(&mut self, field: FieldName) {
        let target = match field {
            FieldName::Country => PickerTarget::Country,
            FieldName::Region => PickerTarget::Region,
            _ => return,
        };
        let has_country = !self.state.form.values().get(FieldName::Country).is_empty();
        if target == PickerTarget::Region && !has_country {
            self.state.status_message = Some("Select a country first".to_string());
            return;
        }
        self.state.pending_picker = Some(PendingPicker::new(target));
    }

    /// Handle keys while a picker dialog is open
    fn handle_picker_key(&mut self, key: KeyEvent) {
        let country = self
            .state
            .form
            .values()
            .get(FieldName::Country)
            .to_string();
        let Some(ref mut picker) = self.state.pending_picker else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.state.pending_picker = None,
            KeyCode::Up => picker.select_prev(),
            KeyCode::Down => {
                let count = picker.options(&country).len();
                picker.select_next(count);
            }
            KeyCode::Char(c) if !platform::is_shortcut(&key) => picker.push_filter(c),
            KeyCode::Backspace => picker.pop_filter(),
            KeyCode::Enter => {
                let target = picker.target;
                let chosen = picker.options(&country).get(picker.selected_index).copied();
                if let Some(value) = chosen {
                    let command = match target {
                        PickerTarget::Country => FormCommand::CountryChanged(value.to_string()),
                        PickerTarget::Region => FormCommand::RegionChanged(value.to_string()),
                    };
                    self.state.form.dispatch(command);
                    self.state.pending_picker = None;
                }
            }
            _ => {}
        }
    }

    /// Press the submit button
    fn submit(&mut self) {
        if !self.state.form.is_submit_enabled() {
            tracing::debug!("submit pressed while disabled");
            return;
        }
        match self.state.form.submit(&mut self.state.navigation) {
            SubmitOutcome::HandedOff => {
                tracing::info!(route = self.state.current_view().route(), "navigated");
            }
            SubmitOutcome::Rejected(failing) => {
                if let Some(first) = failing.first() {
                    self.state.form.focus_field(*first);
                }
            }
        }
    }

    /// Handle keys in the Success view
    fn handle_success_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n') => self.state.start_new_registration(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::PhoneLength;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn pick(app: &mut App, filter: &str) {
        press(app, KeyCode::Enter);
        type_str(app, filter);
        press(app, KeyCode::Enter);
    }

    /// Fill every field through the keyboard, ending on the submit row
    fn fill_form(app: &mut App) {
        for value in ["Ali", "Khan", "alik", "ali@example.com", "Abcdef1!", "9876543210"] {
            type_str(app, value);
            press(app, KeyCode::Tab);
        }
        pick(app, "india");
        press(app, KeyCode::Tab);
        pick(app, "kerala");
        press(app, KeyCode::Tab);
        type_str(app, "Kochi");
        press(app, KeyCode::Tab);
        type_str(app, "ABCDE1234F");
        press(app, KeyCode::Tab);
        type_str(app, "1234 5678 9012");
        press(app, KeyCode::Tab);
    }

    #[test]
    fn test_should_quit_initially_false() {
        let app = App::new(FormProfile::default());
        assert!(!app.should_quit());
        assert_eq!(app.state.current_view(), View::Registration);
    }

    mod typing {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_typing_fills_active_field() {
            let mut app = App::new(FormProfile::default());
            type_str(&mut app, "Ali");
            assert_eq!(app.state.form.values().get(FieldName::FirstName), "Ali");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.values().get(FieldName::FirstName), "Al");
        }

        #[test]
        fn test_tab_blurs_and_shows_error() {
            let mut app = App::new(FormProfile::default());
            type_str(&mut app, "Al1");
            press(&mut app, KeyCode::Tab);
            assert!(app.state.form.errors().message(FieldName::FirstName).is_some());
            assert!(!app.state.form.is_submit_enabled());
        }

        #[test]
        fn test_phone_drops_non_digits() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Phone);
            type_str(&mut app, "+91 98");
            assert_eq!(app.state.form.values().get(FieldName::Phone), "9198");
        }

        #[test]
        fn test_ctrl_t_toggles_secrets() {
            let mut app = App::new(FormProfile::default());
            ctrl(&mut app, 't');
            assert!(app.state.form.secrets_shown());
            assert_eq!(app.state.form.values().get(FieldName::FirstName), "");
        }
    }

    mod pickers {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_country_picker_sets_country() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            pick(&mut app, "canada");
            assert!(app.state.pending_picker.is_none());
            assert_eq!(app.state.form.values().get(FieldName::Country), "Canada");
        }

        #[test]
        fn test_typing_on_picker_opens_it_filtered() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            type_str(&mut app, "nep");
            let picker = app.state.pending_picker.as_ref().expect("picker open");
            assert_eq!(picker.search_filter, "nep");
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.form.values().get(FieldName::Country), "Nepal");
        }

        #[test]
        fn test_region_picker_needs_country() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Region);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.pending_picker.is_none());
            assert!(app.state.status_message.is_some());
        }

        #[test]
        fn test_changing_country_clears_region() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            pick(&mut app, "india");
            app.state.form.focus_field(FieldName::Region);
            pick(&mut app, "goa");
            assert_eq!(app.state.form.values().get(FieldName::Region), "Goa");

            app.state.form.focus_field(FieldName::Country);
            pick(&mut app, "nepal");
            assert_eq!(app.state.form.values().get(FieldName::Region), "");
        }

        #[test]
        fn test_escape_closes_without_change() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Esc);
            assert!(app.state.pending_picker.is_none());
            assert_eq!(app.state.form.values().get(FieldName::Country), "");
        }

        #[test]
        fn test_shortcuts_do_not_type_into_filter() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            press(&mut app, KeyCode::Enter);
            ctrl(&mut app, 's');
            ctrl(&mut app, 't');
            let picker = app.state.pending_picker.as_ref().expect("picker open");
            assert_eq!(picker.search_filter, "");
        }

        #[test]
        fn test_enter_with_no_match_keeps_picker_open() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            pick(&mut app, "zzz");
            assert!(app.state.pending_picker.is_some());
        }

        #[test]
        fn test_backspace_clears_picker_field() {
            let mut app = App::new(FormProfile::default());
            app.state.form.focus_field(FieldName::Country);
            pick(&mut app, "india");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.form.values().get(FieldName::Country), "");
        }
    }

    mod submitting {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_keyboard_session_reaches_success() {
            let mut app = App::new(FormProfile::default());
            fill_form(&mut app);
            assert!(app.state.form.is_submit_focused());

            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view(), View::Success);
            let submission = app.state.navigation.submission.as_ref().expect("payload");
            assert_eq!(submission.len(), 11);
            assert_eq!(submission.get(FieldName::Aadhar), Some("123456789012"));
            assert_eq!(submission.get(FieldName::Region), Some("Kerala"));
        }

        #[test]
        fn test_invalid_submit_stays_on_form() {
            let profile = FormProfile {
                phone_length: PhoneLength::Exact10,
                ..Default::default()
            };
            let mut app = App::new(profile);
            ctrl(&mut app, 's');
            assert_eq!(app.state.current_view(), View::Registration);
            assert_eq!(app.state.form.errors().failing_fields().len(), 11);
            assert_eq!(app.state.form.active_field(), Some(FieldName::FirstName));
        }

        #[test]
        fn test_rejected_submit_focuses_first_failing_field() {
            let mut app = App::new(FormProfile::default());
            fill_form(&mut app);
            // Edited after its last blur, so the stale message still passes
            app.state.form.dispatch(FormCommand::TextChanged {
                field: FieldName::Email,
                value: "not-an-email".to_string(),
            });
            assert!(app.state.form.is_submit_enabled());

            press(&mut app, KeyCode::Enter);

            assert_eq!(app.state.current_view(), View::Registration);
            assert_eq!(app.state.form.active_field(), Some(FieldName::Email));
        }

        #[test]
        fn test_end_jumps_to_submit() {
            let mut app = App::new(FormProfile::default());
            press(&mut app, KeyCode::End);
            assert!(app.state.form.is_submit_focused());
            assert!(app.state.form.is_touched(FieldName::FirstName));
        }

        #[test]
        fn test_disabled_submit_ignores_press() {
            let mut app = App::new(FormProfile::default());
            press(&mut app, KeyCode::Tab);
            // Only firstName has been validated
            ctrl(&mut app, 's');
            assert_eq!(app.state.form.errors().len(), 1);
        }

        #[test]
        fn test_success_view_keys() {
            let mut app = App::new(FormProfile::default());
            fill_form(&mut app);
            ctrl(&mut app, 's');
            assert_eq!(app.state.current_view(), View::Success);

            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.current_view(), View::Registration);
            assert_eq!(app.state.form.values().get(FieldName::FirstName), "");

            fill_form(&mut app);
            ctrl(&mut app, 's');
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }
    }
}
