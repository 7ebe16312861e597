//! Session context
//!
//! The portal threads a CSRF token and the authorized registration number
//! through every request. Both are opaque to the extractors; they exist only
//! to construct the next request. The context is an explicit value type with
//! optional fields, resolved once at the call boundary rather than probed ad
//! hoc from inside request code.

use crate::SessionError;
use regex::Regex;
use std::sync::LazyLock;

/// Hidden `_csrf` input the portal embeds in authenticated pages
static CSRF_INPUT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"name="_csrf"\s+value="([a-f0-9-]+)""#).expect("Invalid csrf regex")
});

/// Opaque security material carried between portal requests
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    /// CSRF token harvested from the most recent dashboard load
    pub csrf_token: Option<String>,

    /// Registration number the session is authorized for
    pub authorized_id: Option<String>,
}

impl SessionContext {
    pub fn new(authorized_id: impl Into<String>) -> Self {
        SessionContext {
            csrf_token: None,
            authorized_id: Some(authorized_id.into()),
        }
    }

    /// Returns the token or a [`SessionError::MissingToken`]
    pub fn token(&self) -> Result<&str, SessionError> {
        self.csrf_token
            .as_deref()
            .ok_or(SessionError::MissingToken)
    }

    /// Returns the authorized id, empty when not yet resolved
    pub fn authorized_id(&self) -> &str {
        self.authorized_id.as_deref().unwrap_or("")
    }
}

/// Pulls the CSRF token out of raw dashboard markup
pub fn extract_csrf_token(html: &str) -> Option<String> {
    CSRF_INPUT
        .captures(html)
        .map(|captures| captures[1].to_string())
}
