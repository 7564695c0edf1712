//! Notifier — composes and sends the one outbound email per accepted submission.
//!
//! `AppState` holds an `Arc<dyn Notifier>`; `SmtpNotifier` is the production
//! backend, tests substitute in-memory stubs.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use lettre::address::AddressError;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;
use tracing::debug;

use crate::config::MailSettings;
use crate::models::submission::Submission;

pub const SUBJECT: &str = "New Portfolio Contact Submission";
const NO_MESSAGE: &str = "(no message)";

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("mail secret '{0}' is not configured")]
    MissingSecret(&'static str),

    #[error("invalid mail address: {0}")]
    Address(#[from] AddressError),

    #[error("could not build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// One outbound email, built from a submission and the configured secrets.
/// Secrets stay optional until send time.
#[derive(Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub to: Option<String>,
    pub from: Option<String>,
    pub app_password: Option<String>,
    pub cc: String,
    pub subject: String,
    pub body: String,
}

impl fmt::Debug for NotificationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationRequest")
            .field("to", &self.to)
            .field("from", &self.from)
            .field(
                "app_password",
                &self.app_password.as_ref().map(|_| "<redacted>"),
            )
            .field("cc", &self.cc)
            .field("subject", &self.subject)
            .finish_non_exhaustive()
    }
}

impl NotificationRequest {
    pub fn for_submission(mail: &MailSettings, submission: &Submission) -> Self {
        Self {
            to: mail.email_to.clone(),
            from: mail.email_from.clone(),
            app_password: mail.app_password.clone(),
            cc: submission.email().to_string(),
            subject: SUBJECT.to_string(),
            body: compose_body(submission),
        }
    }

    /// Builds the MIME message: From sender, To destination, Cc the submitter.
    pub fn to_message(&self) -> Result<Message, DeliveryError> {
        let to = self
            .to
            .as_deref()
            .ok_or(DeliveryError::MissingSecret("EMAIL_TO"))?;
        let from = self
            .from
            .as_deref()
            .ok_or(DeliveryError::MissingSecret("EMAIL_FROM"))?;

        let message = Message::builder()
            .from(from.parse::<Mailbox>()?)
            .to(to.parse::<Mailbox>()?)
            .cc(self.cc.parse::<Mailbox>()?)
            .subject(self.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(self.body.clone())?;

        Ok(message)
    }
}

/// Fixed template; notes are embedded literally.
pub fn compose_body(submission: &Submission) -> String {
    let notes = match submission.notes().trim() {
        "" => NO_MESSAGE,
        notes => notes,
    };
    format!(
        "\nNew contact submitted from your portfolio:\n\nUser Email: {}\nUser Phone: {}\nMessage: {}\n",
        submission.email(),
        submission.phone(),
        notes
    )
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends exactly one message. No retry on failure.
    async fn send(&self, request: &NotificationRequest) -> Result<(), DeliveryError>;
}

/// Authenticated submission over implicit TLS (SMTPS) to a fixed relay.
pub struct SmtpNotifier {
    host: String,
    port: u16,
    timeout: Duration,
}

impl SmtpNotifier {
    pub fn new(mail: &MailSettings) -> Self {
        Self {
            host: mail.smtp_host.clone(),
            port: mail.smtp_port,
            timeout: mail.smtp_timeout,
        }
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, request: &NotificationRequest) -> Result<(), DeliveryError> {
        let message = request.to_message()?;

        // Credentials are checked after addresses so a missing EMAIL_TO is reported first.
        let username = request
            .from
            .clone()
            .ok_or(DeliveryError::MissingSecret("EMAIL_FROM"))?;
        let password = request
            .app_password
            .clone()
            .ok_or(DeliveryError::MissingSecret("GMAIL_APP_PASSWORD"))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.host)?
            .port(self.port)
            .credentials(Credentials::new(username, password))
            .timeout(Some(self.timeout))
            .build();

        let response = transport.send(message).await?;
        debug!(
            "SMTP relay {}:{} accepted message (code {})",
            self.host,
            self.port,
            response.code()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::validation::is_valid_email;

    fn settings() -> MailSettings {
        MailSettings {
            email_to: Some("owner@example.com".into()),
            email_from: Some("sender@example.com".into()),
            app_password: Some("app-password".into()),
            ..MailSettings::default()
        }
    }

    #[test]
    fn test_body_embeds_fields() {
        let s = Submission::new("a@b.com", "123-456-7890", "Looking for a Java dev");
        let body = compose_body(&s);
        assert!(body.contains("New contact submitted from your portfolio:"));
        assert!(body.contains("User Email: a@b.com\n"));
        assert!(body.contains("User Phone: 123-456-7890\n"));
        assert!(body.contains("Message: Looking for a Java dev\n"));
    }

    #[test]
    fn test_body_substitutes_empty_notes() {
        let s = Submission::new("a@b.com", "123-456-7890", "   ");
        assert!(compose_body(&s).contains("Message: (no message)\n"));
    }

    #[test]
    fn test_request_ccs_submitter() {
        let s = Submission::new("a@b.com", "123-456-7890", "");
        let req = NotificationRequest::for_submission(&settings(), &s);
        assert_eq!(req.cc, "a@b.com");
        assert_eq!(req.to.as_deref(), Some("owner@example.com"));
        assert_eq!(req.subject, SUBJECT);
    }

    #[test]
    fn test_request_debug_hides_password() {
        let s = Submission::new("a@b.com", "123-456-7890", "");
        let req = NotificationRequest::for_submission(&settings(), &s);
        assert!(!format!("{req:?}").contains("app-password"));
    }

    #[test]
    fn test_message_headers() {
        let s = Submission::new("a@b.com", "123-456-7890", "");
        let req = NotificationRequest::for_submission(&settings(), &s);
        let raw = String::from_utf8(req.to_message().unwrap().formatted()).unwrap();
        assert!(raw.contains("From: sender@example.com"));
        assert!(raw.contains("To: owner@example.com"));
        assert!(raw.contains("Cc: a@b.com"));
        assert!(raw.contains("Subject: New Portfolio Contact Submission"));
    }

    #[test]
    fn test_message_requires_destination() {
        let s = Submission::new("a@b.com", "123-456-7890", "");
        let mail = MailSettings {
            email_to: None,
            ..settings()
        };
        let err = NotificationRequest::for_submission(&mail, &s)
            .to_message()
            .unwrap_err();
        assert!(matches!(err, DeliveryError::MissingSecret("EMAIL_TO")));
    }

    #[test]
    fn test_message_rejects_malformed_sender() {
        let s = Submission::new("a@b.com", "123-456-7890", "");
        let mail = MailSettings {
            email_from: Some("not an address".into()),
            ..settings()
        };
        let err = NotificationRequest::for_submission(&mail, &s)
            .to_message()
            .unwrap_err();
        assert!(matches!(err, DeliveryError::Address(_)));
    }

    #[test]
    fn test_message_rejects_submitter_the_validator_accepts() {
        // The validator only excludes whitespace and a second '@'; header
        // syntax is stricter, so such a submission is recorded but not emailed.
        assert!(is_valid_email("a<b@c.d"));
        let s = Submission::new("a<b@c.d", "123-456-7890", "");
        let err = NotificationRequest::for_submission(&settings(), &s)
            .to_message()
            .unwrap_err();
        assert!(matches!(err, DeliveryError::Address(_)));
    }

    #[tokio::test]
    async fn test_smtp_send_without_password_fails_before_connecting() {
        let mail = MailSettings {
            app_password: None,
            ..settings()
        };
        let s = Submission::new("a@b.com", "123-456-7890", "");
        let req = NotificationRequest::for_submission(&mail, &s);
        let err = SmtpNotifier::new(&mail).send(&req).await.unwrap_err();
        assert!(matches!(
            err,
            DeliveryError::MissingSecret("GMAIL_APP_PASSWORD")
        ));
    }
}
