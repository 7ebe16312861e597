use serde::Deserialize;

/// Main configuration structure for Vtop-Lens
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub portal: PortalConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Portal endpoint configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PortalConfig {
    /// Base URL of the portal, e.g. "https://vtop.vitap.ac.in/vtop/"
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Path to the two-line credentials file (username, password)
    #[serde(rename = "credentials-path")]
    pub credentials_path: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory where diagnostic markup dumps are spooled
    #[serde(rename = "spool-dir", default = "default_spool_dir")]
    pub spool_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            spool_dir: default_spool_dir(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_spool_dir() -> String {
    ".".to_string()
}
