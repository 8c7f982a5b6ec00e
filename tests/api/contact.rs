//! tests/api/contact.rs
use crate::helpers::{OPERATOR_EMAIL, assert_is_redirect_to, spawn_app};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn valid_submission_redirects_with_message_sent_true() {
    // Arrange
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // Act
    let body = "name=Jane%20Doe&email=jane%40example.com&message=Hello";
    let response = app.post_contact(body.into()).await;

    // Assert
    assert_is_redirect_to(&response, "index.html#message_sent=true");
    assert_eq!(response.text().await.unwrap(), "");
}

#[tokio::test]
async fn valid_submission_mails_the_operator() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = "name=Jane%20Doe&email=jane%40example.com&message=Hello";
    app.post_contact(body.into()).await;

    let emails = app.sent_emails().await;
    let email = &emails[0];
    assert_eq!(email["To"], OPERATOR_EMAIL);
    assert_eq!(email["From"], OPERATOR_EMAIL);
    assert_eq!(email["ReplyTo"], "jane@example.com");
    assert_eq!(email["Subject"], "Contact form submission: Jane Doe");
    assert_eq!(
        email["TextBody"],
        "You have received a new message.  Here are the details:\n Name: Jane Doe \n Email: jane@example.com \n Message \n Hello"
    );
}

#[tokio::test]
async fn delivery_failure_redirects_with_message_sent_false() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = "name=Jane%20Doe&email=jane%40example.com&message=Hello";
    let response = app.post_contact(body.into()).await;

    assert_is_redirect_to(&response, "index.html#message_sent=false");
}

#[tokio::test]
async fn unreachable_email_service_redirects_with_message_sent_false() {
    let app = spawn_app().await;

    let slow = ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(30));
    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(slow)
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = "name=Jane%20Doe&email=jane%40example.com&message=Hello";
    let response = app.post_contact(body.into()).await;

    assert_is_redirect_to(&response, "index.html#message_sent=false");
}

#[tokio::test]
async fn missing_fields_render_the_required_fields_error() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("email=jane%40example.com&message=Hello", "missing the name"),
        ("name=Jane&email=jane%40example.com", "missing the message"),
        ("name=&email=jane%40example.com&message=Hello", "empty name"),
        ("name=Jane&email=jane%40example.com&message=", "empty message"),
    ];

    for (invalid_body, description) in test_cases {
        let response = app.post_contact(invalid_body.into()).await;
        assert_eq!(
            200,
            response.status().as_u16(),
            "The handler did not render an error page when the payload was {}.",
            description
        );
        let html_page = response.text().await.unwrap();
        assert!(
            html_page.contains("Error: all fields are required"),
            "The error page did not list missing fields when the payload was {}.",
            description
        );
        assert!(!html_page.contains("Error: Invalid email address"));
    }
}

#[tokio::test]
async fn malformed_email_renders_the_invalid_email_error() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        "jane",
        "jane%40example",
        "jane%40example.info",
        "jane%2Bnews%40example.com",
    ];

    for email in test_cases {
        let body = format!("name=Jane&email={}&message=Hello", email);
        let response = app.post_contact(body).await;
        let html_page = response.text().await.unwrap();
        assert!(
            html_page.contains("Error: Invalid email address"),
            "The error page did not flag the email {}.",
            email
        );
        assert!(!html_page.contains("Error: all fields are required"));
    }
}

#[tokio::test]
async fn error_page_lists_both_errors_with_line_breaks() {
    let app = spawn_app().await;

    let body = "name=&email=bad-email&message=Hi";
    let response = app.post_contact(body.into()).await;

    assert_eq!(response.status().as_u16(), 200);
    assert!(response.headers().get("Location").is_none());
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("<title>Contact form handler</title>"));
    assert!(html_page.contains(
        "<br />\n Error: all fields are required<br />\n Error: Invalid email address"
    ));
}

#[tokio::test]
async fn an_empty_submission_reports_both_errors() {
    let app = spawn_app().await;

    let response = app.post_contact("".into()).await;

    let html_page = response.text().await.unwrap();
    let required = html_page.find("Error: all fields are required").unwrap();
    let invalid = html_page.find("Error: Invalid email address").unwrap();
    assert!(required < invalid);
}

#[tokio::test]
async fn repeated_submissions_send_one_email_each() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let body = "name=Jane%20Doe&email=jane%40example.com&message=Hello";
    for _ in 0..2 {
        let response = app.post_contact(body.into()).await;
        assert_is_redirect_to(&response, "index.html#message_sent=true");
    }
}

#[tokio::test]
async fn a_lone_zero_is_treated_as_a_missing_field() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        ("name=0&email=jane%40example.com&message=Hello", "zero name"),
        ("name=Jane&email=jane%40example.com&message=0", "zero message"),
        ("name=0&email=jane%40example.com&message=0", "zero name and message"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(body.into()).await;
        assert_eq!(
            200,
            response.status().as_u16(),
            "The handler did not render an error page when the payload had a {}.",
            description
        );
        let html_page = response.text().await.unwrap();
        assert!(
            html_page.contains("Error: all fields are required"),
            "The error page did not list missing fields when the payload had a {}.",
            description
        );
    }
}

#[tokio::test]
async fn repeated_fields_use_the_last_value() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let body = "name=A&name=B&email=jane%40example.com&message=Hello";
    let response = app.post_contact(body.into()).await;

    assert_is_redirect_to(&response, "index.html#message_sent=true");
    let emails = app.sent_emails().await;
    assert_eq!(emails[0]["Subject"], "Contact form submission: B");
}

#[tokio::test]
async fn a_repeated_field_can_still_fail_validation() {
    let app = spawn_app().await;

    let body = "name=Jane&email=jane%40example.com&email=bad-email&message=Hello";
    let response = app.post_contact(body.into()).await;

    assert_eq!(response.status().as_u16(), 200);
    let html_page = response.text().await.unwrap();
    assert!(html_page.contains("Error: Invalid email address"));
}
