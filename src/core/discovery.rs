//! Source file discovery
//!
//! Recursively enumerates candidate files below a root. Siblings are visited
//! in file-name order so the resulting list is the same on every filesystem.
//! Unreadable subtrees are logged and recorded, never fatal.

use crate::error::{handle_error, IntrospectorError, Result};
use crate::models::report::{FailureKind, FileFailure};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Traversal options
#[derive(Debug, Clone)]
pub struct DiscoveryOptions {
    /// File-name suffix of matching files, e.g. `.java`
    pub suffix: String,
    /// Follow symbolic links to directories
    pub follow_links: bool,
}

/// Files found under a root, in traversal order
#[derive(Debug, Default)]
pub struct Discovery {
    pub files: Vec<PathBuf>,
    /// Subtrees that could not be read
    pub failures: Vec<FileFailure>,
}

/// Enumerate the matching files below `root`
///
/// Returns `InvalidPath` when `root` does not exist. A root that is itself a
/// matching file yields just that file.
pub fn discover(root: &Path, options: &DiscoveryOptions) -> Result<Discovery> {
    if !root.exists() {
        return Err(IntrospectorError::InvalidPath {
            path: root.to_path_buf(),
        });
    }

    let mut discovery = Discovery::default();

    let walker = WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if is_source_file(entry.path(), &options.suffix) {
                    discovery.files.push(entry.into_path());
                }
            }
            Err(err) => {
                let path = err
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| root.to_path_buf());
                let message = err.to_string();

                let error = match err.io_error().map(|e| e.kind()) {
                    Some(ErrorKind::PermissionDenied) => {
                        IntrospectorError::permission_denied(&path)
                    }
                    _ => IntrospectorError::directory_traversal_error(&path, &message),
                };
                if let Some(critical) = handle_error(error) {
                    return Err(critical);
                }

                discovery
                    .failures
                    .push(FileFailure::new(path, FailureKind::Traversal, message));
            }
        }
    }

    tracing::debug!(
        "discovered {} file(s) under {}",
        discovery.files.len(),
        root.display()
    );

    Ok(discovery)
}

/// Regular file (or link to one) whose name ends with `suffix`
fn is_source_file(path: &Path, suffix: &str) -> bool {
    path.is_file()
        && path
            .file_name()
            .map(|name| name.to_string_lossy().ends_with(suffix))
            .unwrap_or(false)
}
