//! Application configuration module
//!
//! [`AppConfig`] is read from an optional TOML file (path in
//! `SO_QUOTABLE_CONFIG`) and then overridden by environment variables.
//! Every field has a default suitable for local development except the
//! JWT secret, which must be provided.
//!
//! ```toml
//! server_port = 3000
//! database_url = "sqlite://so-quotable.db"
//! site_url = "https://soquotable.example"
//! jwt_secret = "change-me"
//! admin_emails = ["editor@soquotable.example"]
//!
//! [email]
//! provider = "resend"
//! from = "So Quotable <noreply@soquotable.example>"
//! api_key = "re_..."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the TOML config file
pub const CONFIG_PATH_ENV: &str = "SO_QUOTABLE_CONFIG";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Port the HTTP server binds to
    pub server_port: u16,
    /// sqlx SQLite URL (`sqlite::memory:` for an ephemeral store)
    pub database_url: String,
    /// Public site origin, used to build links in emails
    pub site_url: String,
    /// HMAC secret for session JWTs
    pub jwt_secret: String,
    /// Session token validity in seconds
    pub session_ttl_secs: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Emails promoted to the admin role when their account is created or updated
    pub admin_emails: Vec<String>,
    /// Interval of the expired generated-image purge task; 0 disables it
    pub generated_image_purge_interval_secs: u64,
    /// Outgoing email settings
    pub email: EmailConfig,
}

/// Which transport delivers outgoing email
///
/// Console output is not a provider; only `EmailConfig::test_mode` selects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Resend-style HTTP API
    #[default]
    Resend,
    /// Plain SMTP relay
    Smtp,
}

/// Outgoing email settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Route every message to the console regardless of `provider`
    pub test_mode: bool,
    pub provider: EmailProvider,
    /// `From:` header for every message
    pub from: String,
    /// API key for the HTTP provider
    pub api_key: Option<String>,
    /// Base URL of the HTTP provider
    pub api_base_url: String,
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_port: 3000,
            database_url: "sqlite://so-quotable.db".to_string(),
            site_url: "http://localhost:3000".to_string(),
            jwt_secret: String::new(),
            session_ttl_secs: 60 * 60,
            bcrypt_cost: 12,
            admin_emails: Vec::new(),
            generated_image_purge_interval_secs: 15 * 60,
            email: EmailConfig::default(),
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            test_mode: false,
            provider: EmailProvider::Resend,
            from: "So Quotable <noreply@soquotable.local>".to_string(),
            api_key: None,
            api_base_url: "https://api.resend.com".to_string(),
            smtp_host: None,
            smtp_port: None,
            smtp_username: None,
            smtp_password: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from the optional TOML file and the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_toml_file(Path::new(&path))?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML document; missing keys fall back to defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and parse a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Override fields from environment-style variables
    ///
    /// `lookup` returns the value of a variable, if set. Recognized keys:
    /// `SERVER_PORT`, `DATABASE_URL`, `SITE_URL`, `JWT_SECRET`,
    /// `ADMIN_EMAILS` (comma separated), `EMAIL_PROVIDER`, `EMAIL_FROM`,
    /// `EMAIL_TEST_MODE`, `RESEND_API_KEY`, `SMTP_HOST`, `SMTP_PORT`,
    /// `SMTP_USERNAME`, `SMTP_PASSWORD`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("SERVER_PORT") {
            self.server_port = port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SERVER_PORT",
                message: format!("'{}' is not a valid port", port),
            })?;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(url) = lookup("SITE_URL") {
            self.site_url = url;
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(emails) = lookup("ADMIN_EMAILS") {
            self.admin_emails = emails
                .split(',')
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty())
                .collect();
        }
        if let Some(provider) = lookup("EMAIL_PROVIDER") {
            self.email.provider = match provider.to_lowercase().as_str() {
                "resend" => EmailProvider::Resend,
                "smtp" => EmailProvider::Smtp,
                other => {
                    return Err(ConfigError::InvalidValue {
                        key: "EMAIL_PROVIDER",
                        message: format!("unknown provider '{}'", other),
                    })
                }
            };
        }
        if let Some(from) = lookup("EMAIL_FROM") {
            self.email.from = from;
        }
        if let Some(flag) = lookup("EMAIL_TEST_MODE") {
            self.email.test_mode = matches!(flag.to_lowercase().as_str(), "1" | "true" | "yes");
        }
        if let Some(key) = lookup("RESEND_API_KEY") {
            self.email.api_key = Some(key);
        }
        if let Some(host) = lookup("SMTP_HOST") {
            self.email.smtp_host = Some(host);
        }
        if let Some(port) = lookup("SMTP_PORT") {
            self.email.smtp_port = Some(port.parse().map_err(|_| ConfigError::InvalidValue {
                key: "SMTP_PORT",
                message: format!("'{}' is not a valid port", port),
            })?);
        }
        if let Some(user) = lookup("SMTP_USERNAME") {
            self.email.smtp_username = Some(user);
        }
        if let Some(password) = lookup("SMTP_PASSWORD") {
            self.email.smtp_password = Some(password);
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt_secret.trim().is_empty() {
            return Err(ConfigError::MissingValue("jwt_secret"));
        }
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "bcrypt_cost",
                message: format!("{} is outside 4..=31", self.bcrypt_cost),
            });
        }
        if self.session_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "session_ttl_secs",
                message: "must be positive".to_string(),
            });
        }
        if !self.site_url.starts_with("http://") && !self.site_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(self.site_url.clone()));
        }
        if !self.email.test_mode {
            match self.email.provider {
                EmailProvider::Resend => {
                    if self.email.api_key.is_none() {
                        return Err(ConfigError::MissingValue("email.api_key"));
                    }
                }
                EmailProvider::Smtp => {
                    if self.email.smtp_host.is_none() {
                        return Err(ConfigError::MissingValue("email.smtp_host"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Whether `email` is configured as an administrator
    pub fn is_admin_email(&self, email: &str) -> bool {
        self.admin_emails.iter().any(|a| a.eq_ignore_ascii_case(email))
    }

    /// Absolute link into the site, e.g. `link("/verify-email", token)`
    pub fn link(&self, path: &str, token: &str) -> String {
        format!("{}{}?token={}", self.site_url.trim_end_matches('/'), path, token)
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    pub fn site_url(mut self, url: impl Into<String>) -> Self {
        self.config.site_url = url.into();
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.config.jwt_secret = secret.into();
        self
    }

    pub fn session_ttl_secs(mut self, secs: i64) -> Self {
        self.config.session_ttl_secs = secs;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.config.bcrypt_cost = cost;
        self
    }

    pub fn admin_email(mut self, email: impl Into<String>) -> Self {
        self.config.admin_emails.push(email.into().to_lowercase());
        self
    }

    pub fn generated_image_purge_interval_secs(mut self, secs: u64) -> Self {
        self.config.generated_image_purge_interval_secs = secs;
        self
    }

    pub fn email(mut self, email: EmailConfig) -> Self {
        self.config.email = email;
        self
    }

    pub fn email_test_mode(mut self, on: bool) -> Self {
        self.config.email.test_mode = on;
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
