//! Error types and definitions for the introspector
//!
//! Configuration and output failures propagate to the process boundary;
//! per-file and per-subtree failures are absorbed by the pipeline and only
//! ever reach the caller as log entries and `FileFailure` records.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for introspector operations
#[derive(Debug, Error)]
pub enum IntrospectorError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Project root does not exist
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The Java grammar could not be loaded into the parser
    #[error("Failed to load the Java grammar: {source}")]
    Language {
        #[source]
        source: tree_sitter::LanguageError,
    },

    /// A source file could not be turned into an AST
    #[error("Parse error in {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    /// Analysis errors with free-form context
    #[error("Analysis error: {message}")]
    Analysis { message: String },

    /// Directory traversal errors
    #[error("Directory traversal error for {path}: {message}")]
    DirectoryTraversal { path: PathBuf, message: String },

    /// Parallel execution error
    #[error("Parallel execution error: {message}")]
    ParallelExecution { message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },
}

impl IntrospectorError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - operation can continue
            IntrospectorError::PermissionDenied { .. } => ErrorSeverity::Warning,
            IntrospectorError::Parse { .. } => ErrorSeverity::Warning,
            IntrospectorError::DirectoryTraversal { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            IntrospectorError::Config { .. } => ErrorSeverity::Critical,
            IntrospectorError::InvalidPath { .. } => ErrorSeverity::Critical,
            IntrospectorError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            IntrospectorError::ConfigRead { .. } => ErrorSeverity::Critical,
            IntrospectorError::ConfigParse { .. } => ErrorSeverity::Critical,
            IntrospectorError::GlobPattern { .. } => ErrorSeverity::Critical,
            IntrospectorError::Language { .. } => ErrorSeverity::Critical,
            IntrospectorError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            // Regular errors - the run fails but nothing is corrupted
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            IntrospectorError::PermissionDenied { path } => {
                format!(
                    "Cannot access '{}' due to permission denied. Check file permissions.",
                    path.display()
                )
            }
            IntrospectorError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            IntrospectorError::InvalidPath { path } => {
                format!(
                    "Invalid path: '{}'. Please provide an existing project directory.",
                    path.display()
                )
            }
            IntrospectorError::ConfigNotFound { path } => {
                format!(
                    "Configuration file not found at '{}'. \
                     Create a config file or use command line options.",
                    path.display()
                )
            }
            IntrospectorError::Parse { path, message } => {
                format!("Could not parse '{}': {}. Skipping file.", path.display(), message)
            }
            IntrospectorError::OutputWrite { path, source } => {
                format!(
                    "Could not write report to '{}': {}. \
                     The previous report, if any, was left untouched.",
                    path.display(),
                    source
                )
            }
            IntrospectorError::OutputDirectoryNotFound { path } => {
                format!(
                    "Output directory '{}' does not exist. \
                     Please create the directory or specify a different output path.",
                    path.display()
                )
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        IntrospectorError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        IntrospectorError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        IntrospectorError::PermissionDenied { path: path.into() }
    }

    /// Create a parse error for a single source file
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        IntrospectorError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a directory traversal error
    pub fn directory_traversal_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        IntrospectorError::DirectoryTraversal {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an output write error
    pub fn output_write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IntrospectorError::OutputWrite {
            path: path.into(),
            source,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for IntrospectorError {
    fn from(err: std::io::Error) -> Self {
        IntrospectorError::io_error(err)
    }
}

impl From<glob::PatternError> for IntrospectorError {
    fn from(err: glob::PatternError) -> Self {
        IntrospectorError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for IntrospectorError {
    fn from(err: serde_json::Error) -> Self {
        IntrospectorError::JsonSerialize { source: err }
    }
}

impl From<tree_sitter::LanguageError> for IntrospectorError {
    fn from(err: tree_sitter::LanguageError) -> Self {
        IntrospectorError::Language { source: err }
    }
}

/// Result type alias for introspector operations
pub type Result<T> = std::result::Result<T, IntrospectorError>;
