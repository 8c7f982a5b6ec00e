//! src/domain/submitter_email.rs
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

// A trailing `\n` is accepted before the end of input, the same way a
// non-multiline PCRE `$` behaves.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    RegexBuilder::new(r"^[_a-z0-9-]+(\.[_a-z0-9-]+)*@[a-z0-9-]+(\.[a-z0-9-]+)*(\.[a-z]{2,3})\n?$")
        .case_insensitive(true)
        .unicode(false)
        .build()
        .expect("The email pattern is a valid regular expression.")
});

/// The address a visitor left on the contact form.
///
/// Only the legacy shape check is applied: top level labels longer than
/// three letters are rejected and some invalid addresses slip through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterEmail(String);

impl SubmitterEmail {
    pub fn parse(email: String) -> Result<Self, String> {
        if EMAIL_PATTERN.is_match(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid submitter email.", email))
        }
    }
}

impl AsRef<str> for SubmitterEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmitterEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
