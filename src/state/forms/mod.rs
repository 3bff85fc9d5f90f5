//! Form domain layer
//!
//! Field values, update commands, validation messages and the controller
//! that ties them to focus, blur and submit.

mod controller;
mod field;
mod form_state;
mod profile;

pub use controller::{RegistrationForm, ResultDisplay, SubmitOutcome};
pub use field::{descriptor, FieldDescriptor, FieldName, InputKind};
pub use form_state::{FormCommand, Submission};
pub use profile::FormProfile;
