//! Logging transport used in test mode.
//!
//! Messages are written to the log instead of the network. The most recent
//! ones are also kept in memory so a developer (or a test) can pick the
//! verification link out of them.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::{EmailError, Mailer, OutgoingEmail};

const OUTBOX_CAPACITY: usize = 100;

#[derive(Debug, Default)]
pub struct ConsoleMailer {
    outbox: Mutex<VecDeque<OutgoingEmail>>,
}

impl ConsoleMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .cloned()
            .collect()
    }

    /// Most recent message addressed to `to`
    pub fn last_to(&self, to: &str) -> Option<OutgoingEmail> {
        self.outbox
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .rev()
            .find(|e| e.to == to)
            .cloned()
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "[email test mode]\n{}",
            email.html
        );

        let mut outbox = self.outbox.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        if outbox.len() == OUTBOX_CAPACITY {
            outbox.pop_front();
        }
        outbox.push_back(email.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
