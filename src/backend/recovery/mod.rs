//! Credential Recovery Module
//!
//! Single-use, time-limited tokens delivered by email: email verification
//! (valid 24 hours) and password reset (valid 1 hour, at most three requests
//! per hour).
//!
//! # Module Structure
//!
//! ```text
//! recovery/
//! ├── mod.rs                - Module exports and documentation
//! ├── tokens.rs             - Token generation and expiry
//! ├── rate_limit.rs         - Fixed-window request counter
//! ├── outcome.rs            - Tagged redemption results
//! ├── email_verification.rs - Issue, request and redeem verification tokens
//! ├── password_reset.rs     - Request and redeem reset tokens
//! └── handlers.rs           - HTTP handlers
//! ```
//!
//! # Enumeration Resistance
//!
//! Requests keyed by email address answer identically whether or not the
//! address has an account. Emails are sent on a background task after the
//! transaction commits, so delivery time and delivery failures never show
//! in the response.

pub mod tokens;
pub mod rate_limit;
pub mod outcome;
pub mod email_verification;
pub mod password_reset;
pub mod handlers;

pub use email_verification::{issue_verification_token, request_verification_email, resend_verification, verify_email};
pub use outcome::{MessageResponse, TokenOutcome, TokenResult};
pub use password_reset::{request_password_reset, reset_password};
pub use rate_limit::{FixedWindow, WindowDecision};
