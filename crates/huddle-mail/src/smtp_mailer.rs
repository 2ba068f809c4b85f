use crate::mailer::Mailer;
use crate::outbound_email::OutboundEmail;
use crate::Result;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Connection settings for [`SmtpMailer`]
#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    /// `false` downgrades to cleartext SMTP, for local relays only
    pub tls: bool,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from_address: String,
    pub from_name: String,
}

/// Delivers mail over SMTP with an async pooled transport
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Build a transport from `settings`.
    ///
    /// No connection is opened here; the first send establishes one.
    pub fn new(settings: &SmtpSettings) -> Result<Self> {
        let from: Mailbox =
            format!("{} <{}>", settings.from_name, settings.from_address).parse()?;

        let builder = if settings.tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        }
        .port(settings.port);

        let builder =
            if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
                builder.credentials(Credentials::new(username.clone(), password.clone()))
            } else {
                builder
            };

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        let to: Mailbox = email.to.parse()?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )?;

        self.transport.send(message).await?;

        log::info!("Email sent to '{}', subject '{}'", email.to, email.subject);
        Ok(())
    }
}
