//! src/startup.rs
use crate::configuration::Settings;
use crate::email_client::{EmailClient, MailTransport};
use crate::routes::{contact, contact_page, health_check};
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub async fn build(configuration: &Settings) -> Result<Self, anyhow::Error> {
        let address = format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        );

        // Configure email client
        let email_client = EmailClient::new(
            configuration.email_client.base_url.clone(),
            configuration.email_client.authorization_token.clone(),
            configuration.email_client.timeout(),
        )?;

        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();
        let server = run(
            listener,
            Arc::new(email_client),
            configuration.contact.operator_email.clone(),
        )?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}

pub struct OperatorEmail(pub String);

pub fn run(
    listener: TcpListener,
    transport: Arc<dyn MailTransport>,
    operator_email: String,
) -> Result<Server, anyhow::Error> {
    let transport: web::Data<dyn MailTransport> = web::Data::from(transport);
    let operator_email = web::Data::new(OperatorEmail(operator_email));

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/", web::get().to(contact_page))
            .route("/index.html", web::get().to(contact_page))
            .route("/contact", web::post().to(contact))
            .app_data(transport.clone())
            .app_data(operator_email.clone())
    })
    .listen(listener)?
    .run();
    Ok(server)
}
