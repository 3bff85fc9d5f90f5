//! Form field names and the static descriptor table

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Every field the registration form knows about, in form order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    Country,
    Region,
    City,
    Pan,
    Aadhar,
}

/// How a field takes input and which update command it produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Free text, edited character by character
    Text,
    /// Free text that is masked unless secrets are shown
    Secret,
    /// Identity number; masked only when the profile asks for it
    IdentityNumber,
    /// Phone number control
    Phone,
    /// Country picker
    CountryPicker,
    /// Region picker, filtered by the selected country
    RegionPicker,
    /// City text input
    City,
}

impl InputKind {
    /// Pickers are edited through a dialog rather than typed into
    pub fn is_picker(&self) -> bool {
        matches!(self, InputKind::CountryPicker | InputKind::RegionPicker)
    }
}

/// Rendering metadata for one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: FieldName,
    pub label: &'static str,
    pub kind: InputKind,
}

/// The form layout. Validation rules live in `crate::validation`, keyed by `FieldName`.
pub const FIELD_DESCRIPTORS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: FieldName::FirstName,
        label: "First Name",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        name: FieldName::LastName,
        label: "Last Name",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        name: FieldName::Username,
        label: "Username",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        name: FieldName::Email,
        label: "Email",
        kind: InputKind::Text,
    },
    FieldDescriptor {
        name: FieldName::Password,
        label: "Password",
        kind: InputKind::Secret,
    },
    FieldDescriptor {
        name: FieldName::Phone,
        label: "Phone No.",
        kind: InputKind::Phone,
    },
    FieldDescriptor {
        name: FieldName::Country,
        label: "Country",
        kind: InputKind::CountryPicker,
    },
    FieldDescriptor {
        name: FieldName::Region,
        label: "Region",
        kind: InputKind::RegionPicker,
    },
    FieldDescriptor {
        name: FieldName::City,
        label: "City",
        kind: InputKind::City,
    },
    FieldDescriptor {
        name: FieldName::Pan,
        label: "Pan No.",
        kind: InputKind::IdentityNumber,
    },
    FieldDescriptor {
        name: FieldName::Aadhar,
        label: "Aadhar No.",
        kind: InputKind::IdentityNumber,
    },
];

/// Look up the descriptor for a field
pub fn descriptor(field: FieldName) -> &'static FieldDescriptor {
    // The table is in enum order
    &FIELD_DESCRIPTORS[field as usize]
}
