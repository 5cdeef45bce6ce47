//! Email Module
//!
//! Outgoing transactional email for the verification and password-reset
//! flows. Callers build an [`OutgoingEmail`] from one of the templates and
//! hand it to [`dispatch`], which sends it on a background task: the
//! request that triggered it never waits for delivery and never sees a
//! delivery failure.
//!
//! # Transports
//!
//! - **`resend`** - HTTP transactional-email API (`POST /emails`)
//! - **`smtp`** - SMTP relay via `lettre`
//! - **`console`** - logs the message; used when `email.test_mode` is set
//!
//! # Module Structure
//!
//! ```text
//! email/
//! ├── mod.rs        - Mailer trait, dispatch, transport selection
//! ├── templates.rs  - Verification and reset messages
//! ├── resend.rs     - HTTP API transport
//! ├── smtp.rs       - SMTP transport
//! └── console.rs    - Logging transport
//! ```

use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

use crate::shared::config::{EmailConfig, EmailProvider};

/// Email message templates
pub mod templates;

/// HTTP API transport
pub mod resend;

/// SMTP transport
pub mod smtp;

/// Logging transport
pub mod console;

pub use console::ConsoleMailer;
pub use resend::ResendMailer;
pub use smtp::SmtpMailer;

/// A rendered message ready for delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Delivery errors
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("provider rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("invalid address: {0}")]
    Address(#[from] lettre::address::AddressError),
    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),
    #[error("SMTP error: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("email provider not configured: {0}")]
    NotConfigured(&'static str),
}

/// A transport that delivers [`OutgoingEmail`]s
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError>;

    /// Transport name for logs
    fn name(&self) -> &'static str;
}

/// Select the transport described by `config`
///
/// `test_mode` always selects the console transport.
pub fn build_mailer(config: &EmailConfig) -> Result<Arc<dyn Mailer>, EmailError> {
    if config.test_mode {
        return Ok(Arc::new(ConsoleMailer::new()));
    }
    match config.provider {
        EmailProvider::Resend => Ok(Arc::new(ResendMailer::from_config(config)?)),
        EmailProvider::Smtp => Ok(Arc::new(SmtpMailer::from_config(config)?)),
    }
}

/// Send `email` on a background task
///
/// Failures are logged and dropped; there is no retry.
pub fn dispatch(mailer: Arc<dyn Mailer>, email: OutgoingEmail) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match mailer.send(&email).await {
            Ok(()) => tracing::info!("Sent \"{}\" via {}", email.subject, mailer.name()),
            Err(e) => tracing::error!(
                "Failed to send \"{}\" via {}: {}",
                email.subject,
                mailer.name(),
                e
            ),
        }
    })
}
