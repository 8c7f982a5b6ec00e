//! src/email_client.rs
use crate::domain::ContactMessage;
use crate::routes::error_chain_fmt;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

/// Anything able to deliver a composed contact message.
#[async_trait::async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError>;
}

#[derive(thiserror::Error)]
pub enum DeliveryError {
    #[error("Failed to reach the email delivery service.")]
    Transport(#[source] reqwest::Error),
    #[error("The email delivery service rejected the message.")]
    Rejected(#[source] reqwest::Error),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for DeliveryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }

    #[tracing::instrument(name = "Send contact email", skip(self, message), fields(reply_to = %message.reply_to))]
    pub async fn send_email(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        let url = format!("{}/email", self.base_url);
        let request_body = SendEmailRequest {
            from: &message.from,
            to: &message.to,
            reply_to: &message.reply_to,
            subject: &message.subject,
            text_body: &message.text_body,
        };
        self.http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&request_body)
            .send()
            .await
            .map_err(DeliveryError::Transport)?
            .error_for_status()
            .map_err(DeliveryError::Rejected)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl MailTransport for EmailClient {
    async fn send(&self, message: &ContactMessage) -> Result<(), DeliveryError> {
        self.send_email(message).await
    }
}
