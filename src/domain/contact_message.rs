//! src/domain/contact_message.rs
use crate::domain::ValidSubmission;

/// The notification mailed to the operator for a valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub text_body: String,
}

impl ContactMessage {
    /// Addresses the message from and to the operator; replies go to the visitor.
    pub fn compose(submission: &ValidSubmission, operator_email: &str) -> Self {
        let email = submission.email.as_ref();
        Self {
            to: operator_email.to_owned(),
            from: operator_email.to_owned(),
            reply_to: email.to_owned(),
            subject: format!("Contact form submission: {}", submission.name),
            text_body: format!(
                "You have received a new message.  Here are the details:\n Name: {} \n Email: {} \n Message \n {}",
                submission.name, email, submission.message
            ),
        }
    }
}
