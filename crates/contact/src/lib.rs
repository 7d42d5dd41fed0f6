//! Contact form fields, validation, and the validated submission sent to the
//! webhook.

mod field;
mod submission;

pub use field::Field;
pub use submission::{ContactFields, ContactSubmission, ValidationError, validate};
