//! Error handling for the introspector
//!
//! Error types, the crate-wide result alias and error context utilities.

pub mod context;
pub mod types;

pub use context::{ResultExt, handle_error};
pub use types::{ErrorSeverity, IntrospectorError, Result};
