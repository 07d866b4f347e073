//! Writing a rendered [`ResolvConf`] to disk.

use crate::conf::ResolvConf;
use crate::config::WriterConfig;
use crate::error::Result;
use std::path::Path;

/// Writes configurations to the file described by a [`WriterConfig`].
///
/// Each call to [`write`](Self::write) replaces the whole file.
///
/// # Example
///
/// ```rust,ignore
/// use resolvconf::{Nameserver, ResolvConf, ResolvConfWriter, WriterConfig};
///
/// let mut conf = ResolvConf::new();
/// conf.add(Nameserver::new("1.1.1.1".parse()?))?;
///
/// ResolvConfWriter::new(WriterConfig::default()).write(&conf)?;
/// ```
#[derive(Debug, Clone)]
pub struct ResolvConfWriter {
    config: WriterConfig,
}

impl ResolvConfWriter {
    /// Creates a writer from its configuration.
    #[must_use]
    pub const fn new(config: WriterConfig) -> Self {
        Self { config }
    }

    /// Returns the destination path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Renders the full file content: the header, if any, then one line per
    /// directive.
    #[must_use]
    pub fn render(&self, conf: &ResolvConf) -> String {
        let mut out = String::new();
        if let Some(header) = &self.config.header {
            out.push_str(header);
            out.push('\n');
        }
        out.push_str(&conf.to_string());
        out
    }

    /// Writes the rendered configuration, creating the parent directory if
    /// it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ResolvConfError::Io`](crate::ResolvConfError::Io) if the
    /// directory cannot be created or the file cannot be written.
    pub fn write(&self, conf: &ResolvConf) -> Result<()> {
        let path = self.path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        std::fs::write(path, self.render(conf))?;

        tracing::info!(
            path = %path.display(),
            entries = conf.len(),
            "Wrote resolv.conf"
        );
        Ok(())
    }
}

impl Default for ResolvConfWriter {
    fn default() -> Self {
        Self::new(WriterConfig::default())
    }
}
