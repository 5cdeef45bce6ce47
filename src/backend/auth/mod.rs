//! Authentication Module
//!
//! This module handles user authentication, registration, session management
//! and the authorization guards consulted by every mutation.
//!
//! # Architecture
//!
//! - **`users`** - User data model, database operations and the after-created hook
//! - **`sessions`** - JWT token generation and validation
//! - **`guards`** - require-authenticated, require-owner-or-admin, require-admin
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── sessions.rs     - JWT token management
//! ├── guards.rs       - Authorization checks
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - User authentication handler
//!     └── me.rs       - Current user handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email, password and name → user created, verification email sent → JWT returned
//! 2. **Login**: email and password → credentials verified → JWT returned
//! 3. **Me**: JWT → user info returned
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - JWT tokens expire after one hour
//! - Invalid credentials return 401 (no information leakage)
//! - Roles are always read from the database, never from the token

/// User data model and database operations
pub mod users;

/// JWT token generation and validation
pub mod sessions;

/// Authorization guards
pub mod guards;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use guards::{require_admin, require_auth, require_owner_or_admin};
pub use handlers::types::{AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use handlers::{get_me, login, signup, update_me};
pub use users::{Role, User};
