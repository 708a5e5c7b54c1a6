//! Output writing functionality
//!
//! The report is published atomically: content goes to a temporary file in
//! the destination directory, which is then renamed over the target. A
//! failed write never leaves a partial report behind.

use crate::error::{IntrospectorError, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(IntrospectorError::io_error)
    }
}

/// Writer that replaces a file atomically
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Directory the temporary file is created in
    fn staging_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let write_error = |e: io::Error| IntrospectorError::output_write_error(&self.path, e);

        let mut temp = NamedTempFile::new_in(self.staging_dir()).map_err(write_error)?;
        temp.write_all(content.as_bytes()).map_err(write_error)?;
        temp.flush().map_err(write_error)?;
        temp.as_file().sync_all().map_err(write_error)?;

        // The temporary file is removed when persisting fails
        temp.persist(&self.path).map_err(|e| write_error(e.error))?;

        tracing::debug!("wrote {} bytes to {}", content.len(), self.path.display());
        Ok(())
    }
}
