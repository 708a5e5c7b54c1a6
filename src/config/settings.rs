//! Settings validation

use std::path::Path;
use crate::models::config::Settings;
use crate::error::{IntrospectorError, Result};

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        // The project root must exist before anything is written
        if !settings.scan_path.exists() {
            return Err(IntrospectorError::InvalidPath {
                path: settings.scan_path.clone(),
            });
        }

        if settings.source_suffix.is_empty() {
            return Err(IntrospectorError::config_error("Source suffix must not be empty"));
        }

        for name in &settings.exclude_types {
            if name.is_empty() {
                return Err(IntrospectorError::config_error("Excluded type names must not be empty"));
            }
            glob::Pattern::new(name).map_err(|e| {
                IntrospectorError::config_error(format!("Invalid excluded type pattern '{}': {}", name, e))
            })?;
        }

        if settings.threads == 0 {
            return Err(IntrospectorError::config_error("Thread count must be at least 1"));
        }

        Self::validate_output_path(&settings.output_file)?;

        Ok(())
    }

    /// Validate that the report's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.is_dir() {
                return Err(IntrospectorError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}
