//! Diagnostic spooler
//!
//! When an extractor positively identifies a table but recovers zero rows,
//! the raw markup is dumped to a side file for post-mortem inspection of
//! portal markup drift. Spooling is fire-and-forget: it never fails the
//! caller and never blocks the result path.

use std::path::PathBuf;

/// Side-channel sink for unparseable markup
///
/// Implementations must not panic and must not return errors; the only
/// acceptable failure response is a log line.
pub trait Spool {
    /// Persists the raw markup under the given record-kind label
    fn spool(&self, kind: &str, raw_markup: &str);
}

/// Writes `debug_<kind>.html` files into a directory
#[derive(Debug, Clone)]
pub struct FileSpool {
    dir: PathBuf,
}

impl FileSpool {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileSpool { dir: dir.into() }
    }
}

impl Spool for FileSpool {
    fn spool(&self, kind: &str, raw_markup: &str) {
        let path = self.dir.join(format!("debug_{}.html", kind));
        match std::fs::write(&path, raw_markup) {
            Ok(()) => {
                tracing::warn!(
                    "No usable {} rows in markup; dumped {} bytes to {}",
                    kind,
                    raw_markup.len(),
                    path.display()
                );
            }
            Err(e) => {
                tracing::warn!("Failed to spool {} markup to {}: {}", kind, path.display(), e);
            }
        }
    }
}

/// Discards everything; useful when no spool directory is configured
#[derive(Debug, Clone, Copy)]
pub struct NullSpool;

impl Spool for NullSpool {
    fn spool(&self, _kind: &str, _raw_markup: &str) {}
}
