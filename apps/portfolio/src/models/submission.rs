use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;

/// One accepted contact request. Built only from already-validated input and
/// never mutated afterwards, so fields are private behind getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    timestamp: DateTime<Utc>,
    email: String,
    phone: String,
    notes: String,
}

impl Submission {
    /// Trims every field and stamps the creation instant at second precision.
    pub(crate) fn new(email: &str, phone: &str, notes: &str) -> Self {
        Self::at(Utc::now(), email, phone, notes)
    }

    pub(crate) fn at(timestamp: DateTime<Utc>, email: &str, phone: &str, notes: &str) -> Self {
        Self {
            timestamp: timestamp.trunc_subsecs(0),
            email: email.trim().to_string(),
            phone: phone.trim().to_string(),
            notes: notes.trim().to_string(),
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }
}
