//! Configuration module for Vtop-Lens
//!
//! This module handles loading, parsing, and validating the TOML configuration
//! file, plus the two-line plain-text credentials file.
//!
//! # Example
//!
//! ```no_run
//! use vtop_lens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Portal: {}", config.portal.base_url);
//! ```

mod credentials;
mod parser;
mod types;
mod validation;

// Re-export types
pub use credentials::Credentials;
pub use types::{Config, OutputConfig, PortalConfig, SessionConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
