//! People Module
//!
//! The people quotes are attributed to. Anyone may read; signed-in users
//! may create; only the creator or an admin may edit or delete.
//!
//! # Module Structure
//!
//! ```text
//! people/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Person record and request bodies
//! ├── db.rs       - Database operations
//! └── handlers.rs - HTTP handlers
//! ```

pub mod types;
pub mod db;
pub mod handlers;

pub use types::{CreatePersonRequest, Person, UpdatePersonRequest};
