//! Shared API Types for the portfolio site
//!
//! This crate is the SINGLE SOURCE OF TRUTH for everything that crosses the
//! page ↔ mail-relay HTTP boundary: the contact payload, the structured
//! response shapes, and the endpoint defaults both sides derive their
//! wiring from.
//!
//! ## Boundaries
//!
//! ```text
//! ┌──────────────────┐         ┌──────────────────┐
//! │  Page Controller │  JSON   │  Mail Relay      │
//! │  (client)        │ ◄─────► │  (Axum)          │
//! └──────────────────┘         └──────────────────┘
//! ```
//!
//! ## Rules
//!
//! 1. All wire types live here - no inline struct definitions in handlers
//! 2. Both sides build their endpoint URL from [`DEFAULT_RELAY_PORT`], so
//!    the port can never drift between client and server again

use serde::{Deserialize, Serialize};

// ============================================================================
// ENDPOINT DEFAULTS
// ============================================================================

/// Default listening port for the mail relay. The page's API client derives
/// its target URL from the same constant.
pub const DEFAULT_RELAY_PORT: u16 = 8787;

/// Development origins allowed by the relay's CORS policy. The page is
/// served from a static file server on port 8000; both loopback spellings
/// are equivalent to the browser but distinct to CORS.
pub const PAGE_DEV_ORIGINS: [&str; 2] = ["http://127.0.0.1:8000", "http://localhost:8000"];

/// Build the relay base URL for a given port.
pub fn relay_base_url(port: u16) -> String {
    format!("http://127.0.0.1:{}", port)
}

// ============================================================================
// USER-FACING STATUS TEXT
// ============================================================================
// Fixed strings shared by the page controller and its tests. The relay's
// wire-level error strings live here too so the 400/500 bodies stay in
// lockstep with what the client checks for.

/// Shown when a required field is empty after trimming.
pub const MSG_VALIDATION: &str = "Please fill out all fields.";

/// Interim status while the request is in flight.
pub const MSG_SENDING: &str = "Sending...";

/// Success status; the page pairs this with a "send another" affordance.
pub const MSG_SUCCESS: &str = "Thanks for your message — I'll respond soon.";

/// Generic failure status for any transport or server error.
pub const MSG_FAILURE: &str = "There was a problem sending your message. Please try again later.";

/// Wire-level error reason for a 400 rejection.
pub const ERR_MISSING_FIELDS: &str = "Missing fields";

/// Wire-level error reason for a 500 delivery failure. Deliberately
/// generic: the underlying transport error never crosses the boundary.
pub const ERR_SEND_FAILED: &str = "Failed to send";

// ============================================================================
// CONTACT API
// ============================================================================

/// A contact form submission.
///
/// Fields default to empty on deserialization so an absent key, an empty
/// string, and a whitespace-only string are all treated identically by
/// validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// Build a submission from raw form values, trimming surrounding
    /// whitespace from every field.
    pub fn from_raw(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Return a copy with every field trimmed. Used by the relay, which
    /// receives the payload over the wire rather than from form inputs.
    pub fn trimmed(&self) -> Self {
        Self::from_raw(&self.name, &self.email, &self.message)
    }

    /// True when all three fields are non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

/// Structured result of a contact submission: `{ok, id?}` on acceptance,
/// `{ok: false, error}` on rejection or delivery failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    /// Delivery succeeded; `id` is the transport's delivery identifier.
    pub fn accepted(id: impl Into<String>) -> Self {
        Self {
            ok: true,
            id: Some(id.into()),
            error: None,
        }
    }

    /// Validation or delivery failed with the given reason string.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            id: None,
            error: Some(error.into()),
        }
    }

    /// Success-shaped: `ok` is set and a delivery id is present. The client
    /// treats anything else as a transport failure, including a 2xx with a
    /// negative body.
    pub fn is_success(&self) -> bool {
        self.ok && self.id.is_some()
    }
}

/// Liveness response for `GET /health`. Stateless, always `{ok: true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_trims_all_fields() {
        let s = ContactSubmission::from_raw("  Ada ", " ada@example.com", "Hi\n");
        assert_eq!(s.name, "Ada");
        assert_eq!(s.email, "ada@example.com");
        assert_eq!(s.message, "Hi");
    }

    #[test]
    fn test_is_complete_rejects_whitespace_only() {
        let s = ContactSubmission::from_raw("Ada", "   ", "Hi");
        assert!(!s.is_complete());
        let s = ContactSubmission::from_raw("Ada", "ada@example.com", "Hi");
        assert!(s.is_complete());
    }

    #[test]
    fn test_absent_fields_deserialize_as_empty() {
        let s: ContactSubmission = serde_json::from_str(r#"{"name":"Bo","email":"bo@example.com"}"#)
            .expect("partial payload should deserialize");
        assert_eq!(s.message, "");
        assert!(!s.is_complete());
    }

    #[test]
    fn test_accepted_wire_shape() {
        let json = serde_json::to_string(&ContactResponse::accepted("m1")).unwrap();
        assert_eq!(json, r#"{"ok":true,"id":"m1"}"#);
    }

    #[test]
    fn test_rejected_wire_shape() {
        let json = serde_json::to_string(&ContactResponse::rejected(ERR_MISSING_FIELDS)).unwrap();
        assert_eq!(json, r#"{"ok":false,"error":"Missing fields"}"#);
    }

    #[test]
    fn test_success_shape_requires_ok_and_id() {
        assert!(ContactResponse::accepted("m1").is_success());
        assert!(!ContactResponse::rejected("nope").is_success());
        // ok:true without an id is not success-shaped
        let odd: ContactResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(!odd.is_success());
    }

    #[test]
    fn test_health_wire_shape() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"ok":true}"#);
    }

    #[test]
    fn test_relay_base_url_uses_loopback() {
        assert_eq!(relay_base_url(DEFAULT_RELAY_PORT), "http://127.0.0.1:8787");
    }
}
