//! Environment-sourced configuration.
//!
//! Every variable is optional with a documented default:
//!
//! | Variable         | Default                                   |
//! |------------------|-------------------------------------------|
//! | `PORT`           | [`portfolio_types::DEFAULT_RELAY_PORT`]   |
//! | `SMTP_HOST`      | `smtp.gmail.com`                          |
//! | `SMTP_PORT`      | `587`                                     |
//! | `SMTP_USER`      | unset (unauthenticated delivery attempt)  |
//! | `SMTP_PASS`      | unset                                     |
//! | `TO_EMAIL`       | `SMTP_USER`, else a fixed fallback        |
//! | `MAIL_TRANSPORT` | `smtp` (`outbox` writes files instead)    |
//! | `OUTBOX_DIR`     | `outbox`                                  |

use std::path::PathBuf;

use portfolio_types::DEFAULT_RELAY_PORT;

pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Sender identity when no SMTP username is configured.
pub const DEFAULT_SENDER: &str = "no-reply@localhost";

/// Recipient of last resort when neither `TO_EMAIL` nor `SMTP_USER` is set.
pub const FALLBACK_RECIPIENT: &str = "contact@localhost";

/// Which [`crate::mailer::Mailer`] implementation to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Real SMTP delivery via lettre.
    Smtp,
    /// Write messages to a local outbox directory (credential-free dev).
    Outbox,
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
    /// Resolved recipient address.
    pub to_email: String,
    pub transport: TransportKind,
    pub outbox_dir: PathBuf,
}

impl RelayConfig {
    /// Load configuration from the environment, applying defaults.
    pub fn from_env() -> Self {
        let smtp_user = env_opt("SMTP_USER");
        let smtp_pass = env_opt("SMTP_PASS");
        let to_email = resolve_recipient(env_opt("TO_EMAIL"), smtp_user.as_deref());
        let transport = match env_opt("MAIL_TRANSPORT").as_deref() {
            Some("outbox") => TransportKind::Outbox,
            _ => TransportKind::Smtp,
        };

        Self {
            port: env_opt("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_RELAY_PORT),
            smtp_host: env_opt("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
            smtp_port: env_opt("SMTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_SMTP_PORT),
            smtp_user,
            smtp_pass,
            to_email,
            transport,
            outbox_dir: env_opt("OUTBOX_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("outbox")),
        }
    }

    /// Sender identity: the SMTP username when one is configured.
    pub fn sender(&self) -> &str {
        self.smtp_user.as_deref().unwrap_or(DEFAULT_SENDER)
    }

    /// Credentials pair, present only when both halves are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.smtp_user.as_deref(), self.smtp_pass.as_deref()) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        }
    }
}

/// Read an environment variable, treating empty as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// `TO_EMAIL`, else the SMTP username, else the fixed fallback.
pub fn resolve_recipient(to_email: Option<String>, smtp_user: Option<&str>) -> String {
    to_email
        .or_else(|| smtp_user.map(str::to_string))
        .unwrap_or_else(|| FALLBACK_RECIPIENT.to_string())
}
