//! Form domain layer
//!
//! Type-safe handling of the applicant form: field values, the cascading
//! reset rules driven by the constraint table, and quick-test presets.

mod field;
mod form_state;
mod presets;

pub use field::{format_decimal, FormField};
pub use form_state::{FieldId, Form, PredictionForm};
pub use presets::{Preset, PRESETS};
