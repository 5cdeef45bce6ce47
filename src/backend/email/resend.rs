//! HTTP transactional-email transport.
//!
//! Posts `{from, to, subject, html}` as JSON to `{api_base_url}/emails`
//! with a bearer API key.

use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

use super::{EmailError, Mailer, OutgoingEmail};
use crate::shared::config::EmailConfig;

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Clone)]
pub struct ResendMailer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    from: String,
}

impl ResendMailer {
    pub fn new(base_url: &str, api_key: impl Into<String>, from: impl Into<String>) -> Result<Self, EmailError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            client,
            endpoint: format!("{}/emails", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            from: from.into(),
        })
    }

    pub fn from_config(config: &EmailConfig) -> Result<Self, EmailError> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or(EmailError::NotConfigured("email.api_key"))?;
        Self::new(&config.api_base_url, api_key, config.from.clone())
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let body = SendEmailRequest {
            from: &self.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!("Provider accepted message to {}", email.to);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "resend"
    }
}
