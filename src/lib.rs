//! Vtop-Lens: a terminal lens on the VTOP student portal
//!
//! This crate retrieves a student's academic records from the VTOP web portal
//! and renders them in a terminal. The portal exposes no stable API, so the
//! heart of the crate is a tolerant HTML-to-record extraction engine: one
//! independent extractor per record type, each recovering well-typed records
//! from loosely structured, inconsistently ordered markup.

pub mod config;
pub mod display;
pub mod extract;
pub mod session;

use thiserror::Error;

/// Main error type for Vtop-Lens operations
///
/// The extractors in [`extract`] never produce this error: parsing faults are
/// absorbed there and downgraded to empty results. This type covers the
/// surrounding I/O — configuration, session establishment, page fetches.
#[derive(Debug, Error)]
pub enum VtopError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Credentials error: {0}")]
    Credentials(String),
}

/// Session-boundary errors (login, page requests)
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Login rejected by portal: {0}")]
    LoginRejected(String),

    #[error("Portal returned HTTP {status} for {page}")]
    BadStatus { page: String, status: u16 },

    #[error("Session context is missing a security token")]
    MissingToken,
}

/// Result type alias for Vtop-Lens operations
pub type Result<T> = std::result::Result<T, VtopError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, Credentials};
pub use extract::{TableKind, UNKNOWN_FIELD};
pub use session::{PortalClient, SessionContext};
