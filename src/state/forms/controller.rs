//! Registration form controller

use super::field::{descriptor, FieldName, InputKind};
use super::form_state::{ErrorMap, FormCommand, FormState, Submission};
use super::profile::FormProfile;
use crate::validation;

/// Receives the submitted snapshot once every field passes
#[cfg_attr(test, mockall::automock)]
pub trait ResultDisplay {
    fn show(&mut self, submission: Submission);
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    HandedOff,
    Rejected(Vec<FieldName>),
}

/// Owns the field values and their validation messages for one fill-in session
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    values: FormState,
    errors: ErrorMap,
    profile: FormProfile,
    fields: Vec<FieldName>,
    /// Index into `fields`; `fields.len()` is the submit button row
    active_field_index: usize,
    secrets_shown: bool,
}

impl RegistrationForm {
    pub fn new(profile: FormProfile) -> Self {
        Self {
            values: FormState::default(),
            errors: ErrorMap::default(),
            fields: profile.fields(),
            profile,
            active_field_index: 0,
            secrets_shown: false,
        }
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn profile(&self) -> &FormProfile {
        &self.profile
    }

    /// Collected fields, in form order
    pub fn fields(&self) -> &[FieldName] {
        &self.fields
    }

    /// Apply an update command. Returns true if any value changed.
    pub fn dispatch(&mut self, command: FormCommand) -> bool {
        let next = self.values.apply(&command, &self.profile);
        if next == self.values {
            return false;
        }
        tracing::debug!(field = %command.field(), "form value updated");
        self.values = next;
        true
    }

    /// Validate the field's current value and remember the result
    pub fn blur(&mut self, field: FieldName) -> &str {
        let message = validation::validate(field, self.values.get(field), &self.profile.rules());
        tracing::debug!(%field, valid = message.is_empty(), "field validated");
        self.errors.record(field, message);
        self.errors.get(field).unwrap_or_default()
    }

    /// Validate every collected field and hand off the snapshot if all pass
    pub fn submit(&mut self, display: &mut dyn ResultDisplay) -> SubmitOutcome {
        let rules = self.profile.rules();
        for field in &self.fields {
            let message = validation::validate(*field, self.values.get(*field), &rules);
            self.errors.record(*field, message);
        }

        let failing = self.errors.failing_fields();
        if !failing.is_empty() {
            tracing::debug!(?failing, "submission rejected");
            return SubmitOutcome::Rejected(failing);
        }

        let submission = Submission::capture(&self.values, &self.fields);
        tracing::info!(fields = submission.len(), "submission handed off");
        display.show(submission);
        SubmitOutcome::HandedOff
    }

    /// Whether the submit button accepts presses
    pub fn is_submit_enabled(&self) -> bool {
        if self.errors.has_errors() {
            return false;
        }
        if !self.profile.strict_submit_gate {
            return true;
        }
        let rules = self.profile.rules();
        self.fields
            .iter()
            .all(|f| validation::check(*f, self.values.get(*f), &rules).is_ok())
    }

    /// The field has been validated at least once
    pub fn is_touched(&self, field: FieldName) -> bool {
        self.errors.contains(field)
    }

    /// The field's latest validation passed
    pub fn is_valid(&self, field: FieldName) -> bool {
        self.is_touched(field) && self.errors.message(field).is_none()
    }

    pub fn toggle_secret_visibility(&mut self) {
        self.secrets_shown = !self.secrets_shown;
    }

    pub fn secrets_shown(&self) -> bool {
        self.secrets_shown
    }

    /// Whether the field's value is hidden when rendered
    pub fn is_masked(&self, field: FieldName) -> bool {
        if self.secrets_shown {
            return false;
        }
        match descriptor(field).kind {
            InputKind::Secret => true,
            InputKind::IdentityNumber => self.profile.mask_identity_numbers,
            _ => false,
        }
    }

    // Focus

    pub fn row_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn active_field_index(&self) -> usize {
        self.active_field_index
    }

    /// The focused field, or `None` when the submit button is focused
    pub fn active_field(&self) -> Option<FieldName> {
        self.fields.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    fn set_active_field(&mut self, index: usize) {
        let index = index.min(self.fields.len());
        if index == self.active_field_index {
            return;
        }
        if let Some(leaving) = self.active_field() {
            self.blur(leaving);
        }
        self.active_field_index = index;
    }

    /// Move focus to the next row, wrapping; the field left behind is blurred
    pub fn focus_next(&mut self) {
        let count = self.row_count();
        self.set_active_field((self.active_field_index + 1) % count);
    }

    /// Move focus to the previous row, wrapping; the field left behind is blurred
    pub fn focus_prev(&mut self) {
        let count = self.row_count();
        let current = self.active_field_index;
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    pub fn focus_field(&mut self, field: FieldName) {
        if let Some(index) = self.fields.iter().position(|f| *f == field) {
            self.set_active_field(index);
        }
    }

    pub fn focus_submit(&mut self) {
        self.set_active_field(self.fields.len());
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(FormProfile::default())
    }
}
