//! Mail Transport Abstraction
//!
//! Abstract interface for delivering one outbound message.
//! Implementations target a real SMTP relay, or a local outbox directory
//! for running without credentials during development.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::path::PathBuf;

use portfolio_types::ContactSubmission;

use crate::config::RelayConfig;

/// Error type for delivery attempts. Logged server-side; only a generic
/// reason string ever crosses the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum MailerError {
    #[error("SMTP transport error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),

    #[error("Invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One outbound message, fully formatted and ready for a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub from: String,
    pub to: String,
    /// The submitter's address, so the owner can reply directly.
    pub reply_to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    /// Build the relay's fixed message shape from a validated submission.
    pub fn from_submission(submission: &ContactSubmission, sender: &str, recipient: &str) -> Self {
        Self {
            from: sender.to_string(),
            to: recipient.to_string(),
            reply_to: submission.email.clone(),
            subject: format!("Website contact from {}", submission.name),
            body: format!(
                "From: {} <{}>\n\n{}",
                submission.name, submission.email, submission.message
            ),
        }
    }
}

/// Abstract outbound delivery: one attempt, no retries.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Attempt delivery; returns the transport's delivery identifier.
    async fn send(&self, mail: &OutgoingMail) -> Result<String, MailerError>;
}

// =============================================================================
// SMTP
// =============================================================================

/// Real SMTP delivery (STARTTLS, optional credentials).
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &RelayConfig) -> Result<Self, MailerError> {
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port);
        if let Some((user, pass)) = config.credentials() {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }
        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<String, MailerError> {
        let message = Message::builder()
            .from(mail.from.parse()?)
            .to(mail.to.parse()?)
            .reply_to(mail.reply_to.parse()?)
            .subject(mail.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(mail.body.clone())?;

        let response = self.transport.send(message).await?;

        let id = response.message().collect::<Vec<_>>().join(" ");
        if id.is_empty() {
            Ok(response.code().to_string())
        } else {
            Ok(id)
        }
    }
}

// =============================================================================
// OUTBOX
// =============================================================================

/// Filesystem transport: writes each message to
/// `{dir}/message-{timestamp}.txt` and returns the path as the delivery
/// identifier. Lets the contact flow run end to end with no SMTP account.
pub struct OutboxMailer {
    dir: PathBuf,
}

impl OutboxMailer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl Mailer for OutboxMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<String, MailerError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = self.dir.join(format!("message-{}.txt", stamp));
        let contents = format!(
            "To: {}\nReply-To: {}\nSubject: {}\n\n{}",
            mail.to, mail.reply_to, mail.subject, mail.body
        );
        tokio::fs::write(&path, contents).await?;

        Ok(path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission::from_raw("Ada", "ada@example.com", "Hi")
    }

    #[test]
    fn test_outgoing_mail_subject_from_name() {
        let mail = OutgoingMail::from_submission(&submission(), "relay@localhost", "owner@example.edu");
        assert_eq!(mail.subject, "Website contact from Ada");
    }

    #[test]
    fn test_outgoing_mail_body_and_reply_to() {
        let mail = OutgoingMail::from_submission(&submission(), "relay@localhost", "owner@example.edu");
        assert_eq!(mail.body, "From: Ada <ada@example.com>\n\nHi");
        assert_eq!(mail.reply_to, "ada@example.com");
        assert_eq!(mail.from, "relay@localhost");
        assert_eq!(mail.to, "owner@example.edu");
    }

    #[tokio::test]
    async fn test_outbox_writes_one_file_with_formatted_body() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mailer = OutboxMailer::new(dir.path());
        let mail = OutgoingMail::from_submission(&submission(), "relay@localhost", "owner@example.edu");

        let id = mailer.send(&mail).await.expect("outbox send");
        assert!(id.ends_with(".txt"));

        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .expect("read outbox")
            .collect::<Result<_, _>>()
            .expect("dir entries");
        assert_eq!(entries.len(), 1);

        let contents = std::fs::read_to_string(entries[0].path()).expect("read message");
        assert!(contents.contains("Subject: Website contact from Ada"));
        assert!(contents.ends_with("From: Ada <ada@example.com>\n\nHi"));
    }
}
