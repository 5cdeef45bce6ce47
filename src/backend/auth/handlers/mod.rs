//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//! Handlers are organized into focused submodules for maintainability.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── me.rs       - Current user handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`get_me`** - GET /api/auth/me - Get current user info
//! - **`update_me`** - PATCH /api/auth/me - Change display name
//!
//! Email verification and password reset live in `backend::recovery`.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Current user handlers
pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest, UpdateProfileRequest, UserResponse};

// Re-export handlers
pub use login::login;
pub use me::{get_me, update_me};
pub use signup::signup;
