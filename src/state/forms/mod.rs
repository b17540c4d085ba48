//! Form domain layer
//!
//! Type-safe field handling, form state, and the validation rule table
//! for the attendance form.

mod field;
mod form_state;
pub mod validation;

pub use field::{FieldId, FieldValue, FormField};
pub use form_state::AttendanceForm;
