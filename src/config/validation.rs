use crate::config::types::{Config, PortalConfig, SessionConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_portal_config(&config.portal)?;
    validate_session_config(&config.session)?;
    Ok(())
}

/// Validates portal configuration
fn validate_portal_config(config: &PortalConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base_url must be http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.timeout_secs == 0 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    Ok(())
}

/// Validates session configuration
fn validate_session_config(config: &SessionConfig) -> Result<(), ConfigError> {
    if config.credentials_path.is_empty() {
        return Err(ConfigError::Validation(
            "credentials_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::OutputConfig;

    fn base_config() -> Config {
        Config {
            portal: PortalConfig {
                base_url: "https://vtop.vitap.ac.in/vtop/".to_string(),
                timeout_secs: 30,
            },
            session: SessionConfig {
                credentials_path: "credentials.txt".to_string(),
            },
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&base_config()).is_ok());
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let mut config = base_config();
        config.portal.base_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = base_config();
        config.portal.base_url = "ftp://vtop.vitap.ac.in/".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = base_config();
        config.portal.timeout_secs = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_credentials_path_rejected() {
        let mut config = base_config();
        config.session.credentials_path = String::new();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }
}
