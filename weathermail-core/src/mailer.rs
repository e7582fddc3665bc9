use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::DeliveryError;
use crate::model::EmailMessage;

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers one composed message. Single attempt; any failure aborts the
/// run.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError>;
}

/// Authenticated SMTP delivery over implicit TLS on the secure submission
/// port (465).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpMailer {
    pub fn new(
        host: &str,
        sender: &str,
        password: &str,
        recipient: &str,
    ) -> Result<Self, DeliveryError> {
        let from = parse_mailbox(sender)?;
        let to = parse_mailbox(recipient)?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .credentials(Credentials::new(sender.to_owned(), password.to_owned()))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        Ok(Self { transport, from, to })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(message.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?;

        self.transport.send(email).await?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address
        .parse()
        .map_err(|source| DeliveryError::Address { address: address.to_owned(), source })
}
