//! src/domain/submission.rs
use crate::domain::{SubmitterEmail, ValidationError, ValidationResult};

/// The three contact form fields, as received.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A submission that passed every check.
#[derive(Debug, Clone)]
pub struct ValidSubmission {
    pub name: String,
    pub email: SubmitterEmail,
    pub message: String,
}

// A field holding only `"0"` is treated as left blank.
fn is_blank(field: &str) -> bool {
    field.is_empty() || field == "0"
}

impl Submission {
    /// Runs every check and returns all of the failures. The presence check
    /// always runs before the email check and neither short-circuits the other.
    pub fn validate(self) -> Result<ValidSubmission, ValidationResult> {
        let mut result = ValidationResult::default();
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.message) {
            result.push(ValidationError::MissingFields);
        }
        let email = match SubmitterEmail::parse(self.email) {
            Ok(email) => Some(email),
            Err(_) => {
                result.push(ValidationError::InvalidEmail);
                None
            }
        };
        match email {
            Some(email) if result.is_valid() => Ok(ValidSubmission {
                name: self.name,
                email,
                message: self.message,
            }),
            _ => Err(result),
        }
    }
}
