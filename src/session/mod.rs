//! Session boundary: authentication and authenticated page retrieval
//!
//! The extraction engine never performs network I/O; this module is the
//! external collaborator that supplies it with raw markup snapshots. It owns
//! the cookie-backed HTTP client, the login sequence, and the per-page
//! request payloads.

mod client;
mod context;

pub use client::{build_portal_client, PortalClient};
pub use context::{extract_csrf_token, SessionContext};
