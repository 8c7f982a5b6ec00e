//! src/domain/validation.rs
use std::fmt::Write;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Error: all fields are required")]
    MissingFields,
    #[error("Error: Invalid email address")]
    InvalidEmail,
}

/// Everything wrong with a submission, in the order the checks ran.
/// An empty result means the submission is valid.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn push(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Every error on its own line, each line starting with `"\n "`.
    pub fn error_text(&self) -> String {
        let mut text = String::new();
        for error in &self.errors {
            // Writing into a `String` cannot fail.
            let _ = write!(text, "\n {error}");
        }
        text
    }

    /// The error text with a `<br />` inserted before every line break.
    pub fn error_html(&self) -> String {
        self.error_text().replace('\n', "<br />\n")
    }
}
