//! Mail relay for the portfolio contact form.
//!
//! One endpoint: `POST /contact` validates a submission and attempts
//! exactly one outbound delivery through a [`mailer::Mailer`]; `GET
//! /health` answers liveness checks. Requests are handled independently,
//! with no shared mutable state, no queueing, and no retries.

pub mod config;
pub mod mailer;
pub mod routes;
pub mod state;

pub use config::RelayConfig;
pub use mailer::{Mailer, MailerError, OutboxMailer, OutgoingMail, SmtpMailer};
pub use routes::build_router;
pub use state::AppState;
