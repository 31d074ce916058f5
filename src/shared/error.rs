//! Shared Error Types
//!
//! Errors surfaced by the search bar outside of its infallible UI path.
//!
//! # Error Categories
//!
//! - `Config` - the configuration could not be read, parsed or validated
//! - `NoRuntime` - an async scheduler was requested outside a tokio runtime
//!
//! # Usage
//!
//! ```rust
//! use searchbar::shared::error::SearchBarError;
//!
//! let error = SearchBarError::no_runtime("TokioScheduler::current");
//! assert!(error.to_string().contains("tokio runtime"));
//! ```
use thiserror::Error;

use crate::shared::config::ConfigError;

/// Errors produced while setting up a search bar
#[derive(Debug, Error)]
pub enum SearchBarError {
    /// Configuration failure
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A tokio-backed component was built without a runtime
    #[error("No tokio runtime available for {context}")]
    NoRuntime {
        /// What tried to reach the runtime
        context: String,
    },
}

impl SearchBarError {
    /// Create a new missing-runtime error
    pub fn no_runtime(context: impl Into<String>) -> Self {
        Self::NoRuntime {
            context: context.into(),
        }
    }
}
