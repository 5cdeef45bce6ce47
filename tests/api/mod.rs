//! API integration tests, one module per resource

mod admin_test;
mod auth_test;
mod content_test;
mod recovery_test;
