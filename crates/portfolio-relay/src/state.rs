//! Shared application state
//!
//! Request handling is stateless; the state only carries the transport
//! and the resolved sender/recipient identities.

use std::sync::Arc;

use crate::mailer::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub mailer: Arc<dyn Mailer>,
    pub sender: String,
    pub recipient: String,
}

impl AppState {
    pub fn new(mailer: Arc<dyn Mailer>, sender: impl Into<String>, recipient: impl Into<String>) -> Self {
        Self {
            mailer,
            sender: sender.into(),
            recipient: recipient.into(),
        }
    }
}
