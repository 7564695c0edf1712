use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9 ()\-]{7,20}$").expect("valid phone regex"));

/// The first form field that failed its syntax check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Please enter a valid email.")]
    Email,

    #[error("Please enter a valid phone number.")]
    Phone,
}

/// `local@domain.tld` shape: no whitespace and exactly one `@` per part.
/// Input is matched as given; callers trim only after acceptance.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Optional leading `+`, then 7–20 of digits, spaces, parentheses and hyphens.
pub fn is_valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

/// Checks email then phone, stopping at the first failure.
pub fn validate_contact(email: &str, phone: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::Email);
    }
    if !is_valid_phone(phone) {
        return Err(ValidationError::Phone);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_plain_address() {
        assert!(is_valid_email("name@gmail.com"));
    }

    #[test]
    fn test_email_accepts_uppercase_and_subdomains() {
        assert!(is_valid_email("First.Last@Mail.Example.CO.UK"));
    }

    #[test]
    fn test_email_rejects_missing_at() {
        assert!(!is_valid_email("bad-email"));
    }

    #[test]
    fn test_email_rejects_missing_dot_after_at() {
        assert!(!is_valid_email("name@localhost"));
    }

    #[test]
    fn test_email_rejects_dot_only_before_at() {
        assert!(!is_valid_email("first.last@example"));
    }

    #[test]
    fn test_email_rejects_whitespace() {
        assert!(!is_valid_email("na me@gmail.com"));
        assert!(!is_valid_email(" name@gmail.com"));
        assert!(!is_valid_email("name@gmail.com "));
    }

    #[test]
    fn test_email_rejects_double_at() {
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_email_rejects_empty() {
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_rejects_empty_tld() {
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn test_phone_accepts_formatted_us_number() {
        assert!(is_valid_phone("+1 (469) 347-5994"));
        assert!(is_valid_phone("+1 469 347 5994"));
    }

    #[test]
    fn test_phone_accepts_length_bounds() {
        assert!(is_valid_phone("1234567"));
        assert!(is_valid_phone("12345678901234567890"));
        assert!(is_valid_phone("+1234567"));
    }

    #[test]
    fn test_phone_rejects_out_of_bounds() {
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("123456789012345678901"));
    }

    #[test]
    fn test_phone_rejects_letters() {
        assert!(!is_valid_phone("abc"));
        assert!(!is_valid_phone("555-CALL-NOW"));
    }

    #[test]
    fn test_phone_rejects_inner_plus() {
        assert!(!is_valid_phone("1+234567890"));
        assert!(!is_valid_phone("++1234567890"));
    }

    #[test]
    fn test_phone_rejects_empty() {
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn test_validate_contact_reports_email_first() {
        assert_eq!(validate_contact("bad", "abc"), Err(ValidationError::Email));
    }

    #[test]
    fn test_validate_contact_reports_phone() {
        assert_eq!(
            validate_contact("a@b.com", "abc"),
            Err(ValidationError::Phone)
        );
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::Email.to_string(),
            "Please enter a valid email."
        );
        assert_eq!(
            ValidationError::Phone.to_string(),
            "Please enter a valid phone number."
        );
    }
}
