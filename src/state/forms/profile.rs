//! Form variant selection

use super::field::FieldName;
use crate::validation::{PhoneLength, ValidationRules};
use strum::IntoEnumIterator;

/// Which variant of the registration form is in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormProfile {
    pub phone_length: PhoneLength,
    /// Collect a city after the region
    pub collect_city: bool,
    /// Require PAN to be exactly the 10-character code
    pub anchor_pan: bool,
    /// The visibility toggle also masks PAN and Aadhar
    pub mask_identity_numbers: bool,
    /// Disable submit while any field would fail, touched or not
    pub strict_submit_gate: bool,
}

impl Default for FormProfile {
    fn default() -> Self {
        Self {
            phone_length: PhoneLength::Range10To15,
            collect_city: true,
            anchor_pan: false,
            mask_identity_numbers: false,
            strict_submit_gate: false,
        }
    }
}

impl FormProfile {
    /// Fields collected by this variant, in form order
    pub fn fields(&self) -> Vec<FieldName> {
        FieldName::iter()
            .filter(|f| self.collects(*f))
            .collect()
    }

    pub fn collects(&self, field: FieldName) -> bool {
        field != FieldName::City || self.collect_city
    }

    pub fn rules(&self) -> ValidationRules {
        ValidationRules {
            phone_length: self.phone_length,
            anchor_pan: self.anchor_pan,
        }
    }
}
