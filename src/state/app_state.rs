//! Application state definitions

use super::forms::{FormProfile, RegistrationForm, ResultDisplay, Submission};
use crate::geo;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Registration,
    Success,
}

impl View {
    pub fn route(&self) -> &'static str {
        match self {
            Self::Registration => "/",
            Self::Success => "/success",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "Registration Form",
            Self::Success => "Success",
        }
    }
}

/// Current view plus the payload handed to it
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    pub current_view: View,
    pub submission: Option<Submission>,
}

impl ResultDisplay for Navigation {
    fn show(&mut self, submission: Submission) {
        self.submission = Some(submission);
        self.current_view = View::Success;
    }
}

/// Which picker dialog is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTarget {
    Country,
    Region,
}

impl PickerTarget {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Country => "Select Country",
            Self::Region => "Select Region",
        }
    }
}

/// Open picker dialog with its search filter and selection
#[derive(Debug, Clone)]
pub struct PendingPicker {
    pub target: PickerTarget,
    pub search_filter: String,
    pub selected_index: usize,
}

impl PendingPicker {
    pub fn new(target: PickerTarget) -> Self {
        Self {
            target,
            search_filter: String::new(),
            selected_index: 0,
        }
    }

    /// Options matching the filter; regions are limited to `country`
    pub fn options(&self, country: &str) -> Vec<&'static str> {
        match self.target {
            PickerTarget::Country => {
                geo::filter_options(&geo::country_names(), &self.search_filter)
            }
            PickerTarget::Region => {
                geo::filter_options(geo::regions_for(country), &self.search_filter)
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn select_next(&mut self, option_count: usize) {
        if self.selected_index < option_count.saturating_sub(1) {
            self.selected_index += 1;
        }
    }

    pub fn push_filter(&mut self, c: char) {
        self.search_filter.push(c);
        self.selected_index = 0;
    }

    pub fn pop_filter(&mut self) {
        self.search_filter.pop();
        self.selected_index = 0;
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub navigation: Navigation,
    pub form: RegistrationForm,
    pub pending_picker: Option<PendingPicker>,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(profile: FormProfile) -> Self {
        Self {
            form: RegistrationForm::new(profile),
            ..Default::default()
        }
    }

    pub fn current_view(&self) -> View {
        self.navigation.current_view
    }

    /// Discard the previous session and show a fresh form
    pub fn start_new_registration(&mut self) {
        let profile = *self.form.profile();
        *self = Self::new(profile);
    }
}
