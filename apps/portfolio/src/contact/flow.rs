use tracing::{info, warn};

use crate::config::MailSettings;
use crate::contact::notifier::{DeliveryError, NotificationRequest, Notifier};
use crate::contact::session::SessionContext;
use crate::contact::validation::{validate_contact, ValidationError};
use crate::models::submission::Submission;

pub const SENT_MESSAGE: &str = "Thanks! Your details were sent ✅ (you also received a copy)";
pub const RECORDED_MESSAGE: &str = "Saved your submission, but email sending failed.";

/// Raw form input. Missing fields are treated as empty strings.
#[derive(Debug, Default, Clone, Copy)]
pub struct ContactForm<'a> {
    pub email: &'a str,
    pub phone: &'a str,
    pub notes: &'a str,
}

/// Terminal state of one submission attempt.
#[derive(Debug)]
pub enum ContactOutcome {
    /// Validation failed; nothing was stored or sent.
    Rejected(ValidationError),
    /// Stored and emailed.
    Notified(Submission),
    /// Stored, but the email could not be delivered.
    NotifyFailed {
        submission: Submission,
        error: DeliveryError,
    },
}

impl ContactOutcome {
    /// The user-facing message for this outcome.
    pub fn message(&self) -> String {
        match self {
            ContactOutcome::Rejected(e) => e.to_string(),
            ContactOutcome::Notified(_) => SENT_MESSAGE.to_string(),
            ContactOutcome::NotifyFailed { .. } => RECORDED_MESSAGE.to_string(),
        }
    }
}

/// Orchestrates validate → record → notify. Holds no state of its own.
pub struct ContactFlow<'a> {
    notifier: &'a dyn Notifier,
    mail: &'a MailSettings,
}

impl<'a> ContactFlow<'a> {
    pub fn new(notifier: &'a dyn Notifier, mail: &'a MailSettings) -> Self {
        Self { notifier, mail }
    }

    /// The submission is appended to the session's store before the email is
    /// attempted, so a delivery failure never loses it.
    pub async fn submit(&self, session: &mut SessionContext, form: ContactForm<'_>) -> ContactOutcome {
        if let Err(field) = validate_contact(form.email, form.phone) {
            info!(session_id = %session.id(), ?field, "Contact submission rejected");
            return ContactOutcome::Rejected(field);
        }

        let submission = Submission::new(form.email, form.phone, form.notes);
        session.store_mut().append(submission.clone());
        info!(
            session_id = %session.id(),
            stored = session.store().len(),
            submitted_at = %submission.timestamp(),
            "Contact submission recorded"
        );

        let request = NotificationRequest::for_submission(self.mail, &submission);
        match self.notifier.send(&request).await {
            Ok(()) => {
                info!(session_id = %session.id(), "Contact notification sent");
                ContactOutcome::Notified(submission)
            }
            Err(error) => {
                warn!(session_id = %session.id(), "Contact notification failed: {error}");
                ContactOutcome::NotifyFailed { submission, error }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::contact::notifier::{DeliveryError, NotificationRequest, Notifier};

    /// Records every request and succeeds.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: Mutex<Vec<NotificationRequest>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn send(&self, request: &NotificationRequest) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(request.clone());
            Ok(())
        }
    }

    /// Counts calls and always fails.
    #[derive(Default)]
    pub struct FailingNotifier {
        pub calls: Mutex<usize>,
    }

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _request: &NotificationRequest) -> Result<(), DeliveryError> {
            *self.calls.lock().unwrap() += 1;
            Err(DeliveryError::MissingSecret("GMAIL_APP_PASSWORD"))
        }
    }
}
