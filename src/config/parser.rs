//! Configuration file parsing utilities

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IntrospectorError, Result, ResultExt};
use crate::models::config::PartialSettings;

/// Name of the per-project and per-user configuration file
pub const DEFAULT_CONFIG_FILE: &str = ".introspector.toml";

/// Parse a TOML configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(IntrospectorError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| IntrospectorError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse TOML configuration content into PartialSettings
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings =
        toml::from_str(content).map_err(|e| IntrospectorError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(
    settings: &PartialSettings,
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    if let Some(scan_path) = &settings.scan_path {
        if scan_path.as_os_str().is_empty() {
            return Err(IntrospectorError::config_error(format!(
                "Invalid empty scan_path in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(suffix) = &settings.source_suffix {
        if suffix.is_empty() {
            return Err(IntrospectorError::config_error(format!(
                "Invalid empty source_suffix in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(names) = &settings.exclude_types {
        for name in names {
            if name.is_empty() {
                return Err(IntrospectorError::config_error(format!(
                    "Empty exclude_types entry in config file: {}",
                    path.display()
                )));
            }

            glob::Pattern::new(name).map_err(|e| {
                IntrospectorError::config_error(format!(
                    "Invalid exclude_types entry '{}' in config file: {}: {}",
                    name,
                    path.display(),
                    e
                ))
            })?;
        }
    }

    if settings.threads == Some(0) {
        return Err(IntrospectorError::config_error(format!(
            "Invalid threads 0 in config file: {}. Must be at least 1.",
            path.display()
        )));
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(IntrospectorError::config_error(format!(
                "Invalid empty output_file in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Locations searched for a configuration file, in order
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from(DEFAULT_CONFIG_FILE)];

    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(DEFAULT_CONFIG_FILE));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("introspector").join("config.toml"));
    }

    locations
}

/// First existing configuration file among the default locations
pub fn find_default_config() -> Option<PathBuf> {
    default_config_locations()
        .into_iter()
        .find(|candidate| candidate.is_file())
}

/// Create a default configuration file at the specified path
pub fn create_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let default_config = include_str!("default_config.toml");

    fs::write(path, default_config)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
