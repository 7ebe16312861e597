use crate::ConfigError;
use std::path::Path;

/// Portal login credentials, loaded from a plain-text file
///
/// The file format is two lines: username (registration number) on the first
/// line, password on the second. Blank lines are ignored so a trailing
/// newline or accidental spacing does not break loading.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Loads credentials from the given file path
    ///
    /// # Returns
    ///
    /// * `Ok(Credentials)` - Both lines present and non-empty
    /// * `Err(ConfigError)` - File missing or fewer than two usable lines
    pub fn load(path: &Path) -> Result<Credentials, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::Credentials(format!("cannot read '{}': {}", path.display(), e))
        })?;

        let mut lines = content.lines().map(str::trim).filter(|l| !l.is_empty());

        let username = lines.next().ok_or_else(|| {
            ConfigError::Credentials(format!("'{}' is empty", path.display()))
        })?;
        let password = lines.next().ok_or_else(|| {
            ConfigError::Credentials(format!(
                "'{}' must have two lines: username then password",
                path.display()
            ))
        })?;

        Ok(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_two_lines() {
        let file = write_file("22BCE7777\nhunter2\n");
        let creds = Credentials::load(file.path()).unwrap();
        assert_eq!(creds.username, "22BCE7777");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn test_blank_lines_and_whitespace_ignored() {
        let file = write_file("\n  22BCE7777  \n\n  hunter2\n\n");
        let creds = Credentials::load(file.path()).unwrap();
        assert_eq!(creds.username, "22BCE7777");
        assert_eq!(creds.password, "hunter2");
    }

    #[test]
    fn test_single_line_rejected() {
        let file = write_file("22BCE7777\n");
        assert!(matches!(
            Credentials::load(file.path()),
            Err(ConfigError::Credentials(_))
        ));
    }

    #[test]
    fn test_missing_file_rejected() {
        assert!(matches!(
            Credentials::load(Path::new("/nonexistent/credentials.txt")),
            Err(ConfigError::Credentials(_))
        ));
    }
}
