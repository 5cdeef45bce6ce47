//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server:
//! configuration, validation helpers, slug generation and the error type
//! they report through. Everything here compiles without the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Request field validation
pub mod validation;

/// URL slug generation
pub mod slug;

/// List query parameters
pub mod pagination;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, EmailConfig, EmailProvider};
pub use pagination::Pagination;
