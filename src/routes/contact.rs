//! src/routes/contact.rs
use crate::domain::{ContactMessage, Submission, ValidationResult};
use crate::email_client::MailTransport;
use crate::routes::see_other;
use crate::startup::OperatorEmail;
use actix_web::{HttpResponse, http::header::ContentType, web};

pub const STATUS_PAGE: &str = "index.html";

/// Raw urlencoded pairs. Repeated keys are allowed and the last one wins.
pub type FormData = Vec<(String, String)>;

pub fn submission_from_pairs(pairs: FormData) -> Submission {
    let mut submission = Submission::default();
    for (key, value) in pairs {
        match key.as_str() {
            "name" => submission.name = value,
            "email" => submission.email = value,
            "message" => submission.message = value,
            _ => {}
        }
    }
    submission
}

#[derive(Debug, PartialEq, Eq)]
pub enum ContactOutcome {
    Redirect { message_sent: bool },
    ErrorPage(ValidationResult),
}

impl ContactOutcome {
    pub fn location(message_sent: bool) -> String {
        format!("{STATUS_PAGE}#message_sent={message_sent}")
    }

    pub fn into_response(self) -> HttpResponse {
        match self {
            ContactOutcome::Redirect { message_sent } => see_other(&Self::location(message_sent)),
            ContactOutcome::ErrorPage(result) => HttpResponse::Ok()
                .content_type(ContentType::html())
                .body(error_page(&result)),
        }
    }
}

#[tracing::instrument(
    name = "Handle contact form submission",
    skip(form, transport, operator_email),
    fields(
        submitter_email = tracing::field::Empty,
        submitter_name = tracing::field::Empty
    )
)]
pub async fn contact(
    web::Form(form): web::Form<FormData>,
    transport: web::Data<dyn MailTransport>,
    operator_email: web::Data<OperatorEmail>,
) -> HttpResponse {
    let submission = submission_from_pairs(form);
    tracing::Span::current()
        .record("submitter_email", tracing::field::display(&submission.email))
        .record("submitter_name", tracing::field::display(&submission.name));
    process_submission(submission, transport.get_ref(), &operator_email.0)
        .await
        .into_response()
}

/// Validates a submission and, when it is valid, mails it to the operator.
pub async fn process_submission(
    submission: Submission,
    transport: &dyn MailTransport,
    operator_email: &str,
) -> ContactOutcome {
    let submission = match submission.validate() {
        Ok(submission) => submission,
        Err(result) => {
            tracing::info!(errors = ?result.errors(), "Rejected an invalid contact form submission");
            return ContactOutcome::ErrorPage(result);
        }
    };
    let message = ContactMessage::compose(&submission, operator_email);
    let message_sent = match transport.send(&message).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(e.cause_chain = ?e, "Failed to deliver a contact message");
            false
        }
    };
    ContactOutcome::Redirect { message_sent }
}

fn error_page(result: &ValidationResult) -> String {
    let error_html = result.error_html();
    format!(
        r#"<!DOCTYPE HTML PUBLIC "-//W3C//DTD HTML 4.01 Transitional//EN" "http://www.w3.org/TR/html4/loose.dtd">
<html>
<head>
	<title>Contact form handler</title>
</head>

<body>
{error_html}
</body>
</html>"#
    )
}
