//! SMTP Breach Notifier
//!
//! Sends the token-reuse security alert via the `lettre` async SMTP
//! transport (STARTTLS). When SMTP is not configured the notifier is a
//! no-op that logs the dropped alert; the refresh protocol treats both
//! cases identically since the delivery result is discarded anyway.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::header::ContentType, transport::smtp::authentication::Credentials,
};

use crate::domain::repository::BreachNotifier;
use crate::domain::value_object::email::Email;
use crate::error::MailError;

/// Default SMTP port (STARTTLS)
const DEFAULT_SMTP_PORT: u16 = 587;

/// Default sender address when `SMTP_FROM` is not set
const DEFAULT_FROM_ADDRESS: &str = "security@blog.local";

const ALERT_SUBJECT: &str = "Security alert: your session was ended";
const ALERT_BODY: &str = "A sign-in credential for your account was used after it had \
already been replaced. As a precaution the session has been ended.\n\n\
If this was not you, please change your password.";

/// SMTP connection configuration
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    /// SMTP server hostname
    pub host: String,
    /// SMTP server port (defaults to 587)
    pub port: u16,
    /// RFC 5322 "From" address
    pub from_address: String,
    /// Optional SMTP username
    pub user: Option<String>,
    /// Optional SMTP password
    pub password: Option<String>,
}

impl SmtpConfig {
    /// Load configuration from environment variables
    ///
    /// Returns `None` if `SMTP_HOST` is not set, signalling that alert
    /// delivery is not configured.
    pub fn from_env() -> Option<Self> {
        let host = std::env::var("SMTP_HOST").ok()?;
        Some(Self {
            host,
            port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            from_address: std::env::var("SMTP_FROM")
                .unwrap_or_else(|_| DEFAULT_FROM_ADDRESS.to_string()),
            user: std::env::var("SMTP_USER").ok(),
            password: std::env::var("SMTP_PASSWORD").ok(),
        })
    }
}

/// SMTP-backed breach notifier
#[derive(Clone)]
pub struct SmtpBreachNotifier {
    config: Option<SmtpConfig>,
}

impl SmtpBreachNotifier {
    pub fn new(config: SmtpConfig) -> Self {
        Self {
            config: Some(config),
        }
    }

    /// Build from environment; unconfigured SMTP yields a logging no-op
    pub fn from_env() -> Self {
        let config = SmtpConfig::from_env();
        if config.is_none() {
            tracing::warn!("SMTP_HOST not set; breach alerts will be logged but not delivered");
        }
        Self { config }
    }

    /// A notifier that never sends (tests, local development)
    pub fn disabled() -> Self {
        Self { config: None }
    }
}

impl BreachNotifier for SmtpBreachNotifier {
    async fn notify(&self, email: &Email) -> Result<(), MailError> {
        let Some(config) = &self.config else {
            tracing::warn!(to = %email, "Breach alert dropped, SMTP not configured");
            return Ok(());
        };

        let message = Message::builder()
            .from(config.from_address.parse()?)
            .to(email.as_str().parse()?)
            .subject(ALERT_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(ALERT_BODY.to_string())
            .map_err(|e| MailError::Build(e.to_string()))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port);

        if let (Some(user), Some(password)) = (&config.user, &config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), password.clone()));
        }

        builder.build().send(message).await?;

        tracing::info!(to = %email, "Breach alert sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_notifier_is_ok() {
        let notifier = SmtpBreachNotifier::disabled();
        let email = Email::from_db("owner@example.com");
        assert!(notifier.notify(&email).await.is_ok());
    }

    #[test]
    fn test_mail_error_display() {
        let err = MailError::Build("missing body".to_string());
        assert_eq!(err.to_string(), "Email build error: missing body");
    }
}
