//! Form records: field values, update commands, errors and the submitted snapshot

use super::field::{descriptor, FieldName, InputKind};
use super::profile::FormProfile;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Current value of every field. An empty string means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    username: String,
    email: String,
    password: String,
    phone: String,
    country: String,
    region: String,
    city: String,
    pan: String,
    aadhar: String,
}

/// Typed update commands produced by the input controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    TextChanged { field: FieldName, value: String },
    PhoneChanged(String),
    CountryChanged(String),
    RegionChanged(String),
    CityChanged(String),
}

impl FormCommand {
    /// The command an input control emits when `field` takes `value`
    pub fn for_input(field: FieldName, value: String) -> Self {
        match descriptor(field).kind {
            InputKind::Phone => FormCommand::PhoneChanged(value),
            InputKind::CountryPicker => FormCommand::CountryChanged(value),
            InputKind::RegionPicker => FormCommand::RegionChanged(value),
            InputKind::City => FormCommand::CityChanged(value),
            InputKind::Text | InputKind::Secret | InputKind::IdentityNumber => {
                FormCommand::TextChanged { field, value }
            }
        }
    }

    /// The field whose value the command sets
    pub fn field(&self) -> FieldName {
        match self {
            FormCommand::TextChanged { field, .. } => *field,
            FormCommand::PhoneChanged(_) => FieldName::Phone,
            FormCommand::CountryChanged(_) => FieldName::Country,
            FormCommand::RegionChanged(_) => FieldName::Region,
            FormCommand::CityChanged(_) => FieldName::City,
        }
    }
}

fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl FormState {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Username => &self.username,
            FieldName::Email => &self.email,
            FieldName::Password => &self.password,
            FieldName::Phone => &self.phone,
            FieldName::Country => &self.country,
            FieldName::Region => &self.region,
            FieldName::City => &self.city,
            FieldName::Pan => &self.pan,
            FieldName::Aadhar => &self.aadhar,
        }
    }

    fn slot_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Username => &mut self.username,
            FieldName::Email => &mut self.email,
            FieldName::Password => &mut self.password,
            FieldName::Phone => &mut self.phone,
            FieldName::Country => &mut self.country,
            FieldName::Region => &mut self.region,
            FieldName::City => &mut self.city,
            FieldName::Pan => &mut self.pan,
            FieldName::Aadhar => &mut self.aadhar,
        }
    }

    /// A copy of this record with one field replaced
    pub fn with(&self, field: FieldName, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.slot_mut(field) = value.into();
        next
    }

    /// Produce the record that results from `command`. `self` is left untouched.
    pub fn apply(&self, command: &FormCommand, profile: &FormProfile) -> Self {
        match command {
            FormCommand::TextChanged { field, value } => match field {
                FieldName::Aadhar => self.with(*field, digits_only(value)),
                _ => self.with(*field, value.as_str()),
            },
            FormCommand::PhoneChanged(value) => self.with(FieldName::Phone, digits_only(value)),
            FormCommand::CountryChanged(value) => {
                let mut next = self
                    .with(FieldName::Country, value.as_str())
                    .with(FieldName::Region, "");
                if profile.collect_city {
                    next.city.clear();
                }
                next
            }
            FormCommand::RegionChanged(value) => {
                let mut next = self.with(FieldName::Region, value.as_str());
                if profile.collect_city {
                    next.city.clear();
                }
                next
            }
            FormCommand::CityChanged(value) => self.with(FieldName::City, value.as_str()),
        }
    }
}

/// Latest validation message per field. A field is present once it has been validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldName, String>,
}

impl ErrorMap {
    pub fn record(&mut self, field: FieldName, message: String) {
        self.entries.insert(field, message);
    }

    /// The stored message, or `None` if the field was never validated
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// The stored message if it is non-empty
    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.get(field).filter(|m| !m.is_empty())
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn has_errors(&self) -> bool {
        self.entries.values().any(|m| !m.is_empty())
    }

    pub fn failing_fields(&self) -> Vec<FieldName> {
        self.entries
            .iter()
            .filter(|(_, m)| !m.is_empty())
            .map(|(f, _)| *f)
            .collect()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Snapshot of the submitted values, one entry per collected field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    entries: Vec<(FieldName, String)>,
}

impl Submission {
    pub fn capture(values: &FormState, fields: &[FieldName]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|f| (*f, values.get(*f).to_string()))
                .collect(),
        }
    }

    pub fn entries(&self) -> &[(FieldName, String)] {
        &self.entries
    }

    #[cfg(test)]
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Submission {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            let key: &str = field.as_ref();
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        FormState::default()
            .with(FieldName::Country, "India")
            .with(FieldName::Region, "Kerala")
            .with(FieldName::City, "Kochi")
    }

    mod form_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all_empty() {
            let state = FormState::default();
            for field in [FieldName::FirstName, FieldName::Phone, FieldName::Aadhar] {
                assert_eq!(state.get(field), "");
            }
        }

        #[test]
        fn test_with_leaves_original_untouched() {
            let original = FormState::default();
            let next = original.with(FieldName::Email, "a@b.co");
            assert_eq!(original.get(FieldName::Email), "");
            assert_eq!(next.get(FieldName::Email), "a@b.co");
        }

        #[test]
        fn test_text_changed_replaces_single_field() {
            let state = filled();
            let next = state.apply(
                &FormCommand::TextChanged {
                    field: FieldName::Username,
                    value: "alice".into(),
                },
                &FormProfile::default(),
            );
            assert_eq!(next, state.with(FieldName::Username, "alice"));
        }

        #[test]
        fn test_aadhar_strips_non_digits() {
            let next = FormState::default().apply(
                &FormCommand::TextChanged {
                    field: FieldName::Aadhar,
                    value: "1234-5678 9012x".into(),
                },
                &FormProfile::default(),
            );
            assert_eq!(next.get(FieldName::Aadhar), "123456789012");
        }

        #[test]
        fn test_pan_is_stored_verbatim() {
            let next = FormState::default().apply(
                &FormCommand::TextChanged {
                    field: FieldName::Pan,
                    value: "abc 123".into(),
                },
                &FormProfile::default(),
            );
            assert_eq!(next.get(FieldName::Pan), "abc 123");
        }

        #[test]
        fn test_phone_changed_strips_non_digits() {
            let next = FormState::default().apply(
                &FormCommand::PhoneChanged("+91 98765-43210".into()),
                &FormProfile::default(),
            );
            assert_eq!(next.get(FieldName::Phone), "919876543210");
        }

        #[test]
        fn test_country_change_resets_region_and_city() {
            let next = filled().apply(
                &FormCommand::CountryChanged("Canada".into()),
                &FormProfile::default(),
            );
            assert_eq!(next.get(FieldName::Country), "Canada");
            assert_eq!(next.get(FieldName::Region), "");
            assert_eq!(next.get(FieldName::City), "");
        }

        #[test]
        fn test_country_change_keeps_city_without_city_variant() {
            let profile = FormProfile {
                collect_city: false,
                ..Default::default()
            };
            let next = filled().apply(&FormCommand::CountryChanged("Canada".into()), &profile);
            assert_eq!(next.get(FieldName::Region), "");
            assert_eq!(next.get(FieldName::City), "Kochi");
        }

        #[test]
        fn test_region_change_resets_city() {
            let next = filled().apply(
                &FormCommand::RegionChanged("Goa".into()),
                &FormProfile::default(),
            );
            assert_eq!(next.get(FieldName::Country), "India");
            assert_eq!(next.get(FieldName::Region), "Goa");
            assert_eq!(next.get(FieldName::City), "");
        }

        #[test]
        fn test_for_input_follows_input_kind() {
            assert_eq!(
                FormCommand::for_input(FieldName::Phone, "1".into()),
                FormCommand::PhoneChanged("1".into())
            );
            assert_eq!(
                FormCommand::for_input(FieldName::Region, "Goa".into()),
                FormCommand::RegionChanged("Goa".into())
            );
            assert_eq!(
                FormCommand::for_input(FieldName::City, "Kochi".into()),
                FormCommand::CityChanged("Kochi".into())
            );
            assert_eq!(
                FormCommand::for_input(FieldName::Aadhar, "12".into()),
                FormCommand::TextChanged {
                    field: FieldName::Aadhar,
                    value: "12".into()
                }
            );
        }

        #[test]
        fn test_command_field() {
            let command = FormCommand::TextChanged {
                field: FieldName::Pan,
                value: String::new(),
            };
            assert_eq!(command.field(), FieldName::Pan);
            assert_eq!(
                FormCommand::CountryChanged(String::new()).field(),
                FieldName::Country
            );
        }

        #[test]
        fn test_city_changed() {
            let next = filled().apply(
                &FormCommand::CityChanged("Thrissur".into()),
                &FormProfile::default(),
            );
            assert_eq!(next.get(FieldName::City), "Thrissur");
            assert_eq!(next.get(FieldName::Region), "Kerala");
        }
    }

    mod error_map {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_absent_until_recorded() {
            let mut errors = ErrorMap::default();
            assert!(!errors.contains(FieldName::Email));
            assert_eq!(errors.get(FieldName::Email), None);

            errors.record(FieldName::Email, String::new());
            assert!(errors.contains(FieldName::Email));
            assert_eq!(errors.get(FieldName::Email), Some(""));
            assert_eq!(errors.message(FieldName::Email), None);
            assert!(!errors.has_errors());
        }

        #[test]
        fn test_failing_fields() {
            let mut errors = ErrorMap::default();
            errors.record(FieldName::Email, "bad".into());
            errors.record(FieldName::Username, String::new());
            errors.record(FieldName::FirstName, "bad".into());
            assert!(errors.has_errors());
            assert_eq!(
                errors.failing_fields(),
                vec![FieldName::FirstName, FieldName::Email]
            );
            assert_eq!(errors.len(), 3);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_capture_keeps_order_and_names() {
            let values = filled().with(FieldName::FirstName, "Ali");
            let fields = [FieldName::FirstName, FieldName::Country, FieldName::City];
            let submission = Submission::capture(&values, &fields);
            assert_eq!(
                submission.entries(),
                &[
                    (FieldName::FirstName, "Ali".to_string()),
                    (FieldName::Country, "India".to_string()),
                    (FieldName::City, "Kochi".to_string()),
                ]
            );
            assert_eq!(submission.get(FieldName::Region), None);
        }

        #[test]
        fn test_serializes_as_camel_case_object() {
            let values = filled().with(FieldName::FirstName, "Ali");
            let submission = Submission::capture(&values, &[FieldName::FirstName, FieldName::City]);
            let json = serde_json::to_string(&submission).unwrap();
            assert_eq!(json, r#"{"firstName":"Ali","city":"Kochi"}"#);
        }
    }
}
