//! src/routes/home/mod.rs
use actix_web::{HttpResponse, http::header::ContentType};

/// The status page that hosts the form. It reads `#message_sent=<bool>`
/// client side, so the same document serves every outcome.
const CONTACT_PAGE: &str = include_str!("home.html");

#[tracing::instrument(name = "Serve contact page")]
pub async fn contact_page() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(CONTACT_PAGE)
}
