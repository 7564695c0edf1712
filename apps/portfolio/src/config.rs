use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
const DEFAULT_SMTP_PORT: u16 = 465;
const DEFAULT_SMTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration loaded from environment variables.
/// Mail secrets are optional here; their absence only surfaces when a send is attempted.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub mail: MailSettings,
    pub profile_image_path: PathBuf,
    pub resume_pdf_path: PathBuf,
}

/// Outbound mail settings: the three externally supplied secrets plus relay endpoint.
#[derive(Clone)]
pub struct MailSettings {
    pub email_to: Option<String>,
    pub email_from: Option<String>,
    pub app_password: Option<String>,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_timeout: Duration,
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailSettings")
            .field("email_to", &self.email_to)
            .field("email_from", &self.email_from)
            .field(
                "app_password",
                &self.app_password.as_ref().map(|_| "<redacted>"),
            )
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_timeout", &self.smtp_timeout)
            .finish()
    }
}

impl Default for MailSettings {
    fn default() -> Self {
        Self {
            email_to: None,
            email_from: None,
            app_password: None,
            smtp_host: DEFAULT_SMTP_HOST.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_timeout: Duration::from_secs(DEFAULT_SMTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080u16).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            mail: MailSettings {
                email_to: optional_env("EMAIL_TO"),
                email_from: optional_env("EMAIL_FROM"),
                app_password: optional_env("GMAIL_APP_PASSWORD"),
                smtp_host: optional_env("SMTP_HOST")
                    .unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                smtp_port: parse_env("SMTP_PORT", DEFAULT_SMTP_PORT)
                    .context("SMTP_PORT must be a valid port number")?,
                smtp_timeout: Duration::from_secs(
                    parse_env("SMTP_TIMEOUT_SECS", DEFAULT_SMTP_TIMEOUT_SECS)
                        .context("SMTP_TIMEOUT_SECS must be a whole number of seconds")?,
                ),
            },
            profile_image_path: optional_env("PROFILE_IMAGE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets/profile.jpeg")),
            resume_pdf_path: optional_env("RESUME_PDF_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("assets/resume.pdf")),
        })
    }
}

/// Reads an env var, treating unset and blank values alike.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}
