//! Output configuration for [`ResolvConfWriter`](crate::ResolvConfWriter).

use std::path::PathBuf;

/// Default location of the system resolver configuration.
pub const DEFAULT_PATH: &str = "/etc/resolv.conf";

/// Default comment written as the first line of the file.
pub const DEFAULT_HEADER: &str = "# Generated by resolvconf";

/// Where and how a rendered configuration is written.
///
/// # Example
///
/// ```
/// use resolvconf::WriterConfig;
///
/// let config = WriterConfig::new("/tmp/resolv.conf")
///     .with_header("# managed by netctl");
///
/// assert_eq!(config.path.to_str(), Some("/tmp/resolv.conf"));
/// assert_eq!(config.header.as_deref(), Some("# managed by netctl"));
/// ```
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Destination file.
    pub path: PathBuf,

    /// Comment line written before the directives, if any.
    pub header: Option<String>,
}

impl WriterConfig {
    /// Creates a config targeting `path` with the default header.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            header: Some(DEFAULT_HEADER.to_string()),
        }
    }

    /// Overrides the header comment.
    #[must_use]
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Omits the header comment.
    #[must_use]
    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PATH)
    }
}
