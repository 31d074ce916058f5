//! Shared Module
//!
//! Types that do not depend on a rendering backend: configuration, platform
//! metrics and error types.

/// Shared error types
pub mod error;

/// Search bar configuration
pub mod config;

/// Platform-specific metrics
pub mod platform;

/// Re-export commonly used types for convenience
pub use config::{
    AutoCapitalize, ConfigError, Icon, KeyboardAppearance, SearchBarConfig,
    SearchBarConfigBuilder, TextInputTraits,
};
pub use error::SearchBarError;
pub use platform::Platform;
