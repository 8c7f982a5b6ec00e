//! src/domain/mod.rs
mod contact_message;
mod submission;
mod submitter_email;
mod validation;

pub use contact_message::ContactMessage;
pub use submission::{Submission, ValidSubmission};
pub use submitter_email::SubmitterEmail;
pub use validation::{ValidationError, ValidationResult};
