//! Quotes Module
//!
//! Quotations attributed to a person. Signed-in users add quotes, the
//! creator or an admin edits and deletes them, and only admins mark a
//! quote verified.
//!
//! # Module Structure
//!
//! ```text
//! quotes/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Quote record and request bodies
//! ├── db.rs       - Database operations
//! └── handlers.rs - HTTP handlers
//! ```

pub mod types;
pub mod db;
pub mod handlers;

pub use types::{CreateQuoteRequest, Quote, UpdateQuoteRequest, VerifyQuoteRequest};
