//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - An in-memory application fixture driving the real router
//! - Authentication helpers (sign up, read tokens out of emails)
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
