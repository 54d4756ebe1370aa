//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Environments
//!
//! `main` picks an environment with `--env` (or `APP_ENV`): `local`, `development`
//! or `production`. It loads `.env.<env>` if present, falling back to `.env`, and
//! the environment decides the default log level and format.
//!
//! ## Database
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.db?mode=rwc"
//! # or
//! export DATABASE_PATH="data/urls.db"
//! ```
//!
//! `DATABASE_URL` wins when both are set.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` or `DATABASE_PATH`
//! - `HTTP_USER`, `HTTP_PASSWORD` - Basic-auth credential for the mutating endpoints
//! - `AUTH_CLIENT_ADDRESS` - `http://host:port` of the authorization service
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `REQUEST_TIMEOUT_MS` - Whole-request timeout (default: 4000)
//! - `HTTP_USER_ID` - Subject id checked for the basic-auth user (default: 1)
//! - `AUTH_CLIENT_TIMEOUT_MS` - Per-attempt timeout (default: 1000)
//! - `AUTH_CLIENT_RETRIES_COUNT` - Attempts per check, 1 to 10 (default: 3)
//! - `AUTH_CLIENT_BACKOFF_MS` - Base backoff between attempts (default: 50)
//! - `ALIAS_GENERATION_ATTEMPTS` - Generated-alias collision budget (default: 5)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)
//! - `RUST_LOG` - Log filter (default: `debug`, `info` in production)
//! - `LOG_FORMAT` - `text` or `json` (default: `text` locally, `json` otherwise)

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::auth::RetryPolicy;

/// Deployment environment selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Environment {
    #[default]
    Local,
    Development,
    Production,
}

impl Environment {
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }

    /// Dotenv file read before falling back to `.env`.
    pub fn env_file(self) -> String {
        format!(".env.{}", self.as_str())
    }

    pub fn default_log_level(self) -> &'static str {
        match self {
            Environment::Production => "info",
            _ => "debug",
        }
    }

    pub fn default_log_format(self) -> &'static str {
        match self {
            Environment::Local => "text",
            _ => "json",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    pub environment: Environment,
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Deadline for a whole request, handler included (`REQUEST_TIMEOUT_MS`).
    pub request_timeout_ms: u64,

    // ── Basic auth ──────────────────────────────────────────────────────────
    pub http_user: String,
    pub http_password: String,
    /// Subject id sent to the authorization service for `http_user`.
    pub http_user_id: i64,

    // ── Authorization client ────────────────────────────────────────────────
    pub auth_client_address: String,
    pub auth_client_timeout_ms: u64,
    /// Total attempts per privilege check, including the first.
    pub auth_client_retries: u32,
    pub auth_client_backoff_ms: u64,

    /// Candidates tried when saving without an alias.
    pub alias_generation_attempts: u32,

    // ── SqlitePool settings ─────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or a numeric
    /// variable does not parse.
    pub fn from_env(environment: Environment) -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let log_level =
            env::var("RUST_LOG").unwrap_or_else(|_| environment.default_log_level().to_string());
        let log_format = env::var("LOG_FORMAT")
            .unwrap_or_else(|_| environment.default_log_format().to_string());

        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;
        let auth_client_address =
            env::var("AUTH_CLIENT_ADDRESS").context("AUTH_CLIENT_ADDRESS must be set")?;

        Ok(Self {
            environment,
            database_url,
            listen_addr,
            log_level,
            log_format,
            request_timeout_ms: parse_var("REQUEST_TIMEOUT_MS", 4000)?,
            http_user,
            http_password,
            http_user_id: parse_var("HTTP_USER_ID", 1)?,
            auth_client_address,
            auth_client_timeout_ms: parse_var("AUTH_CLIENT_TIMEOUT_MS", 1000)?,
            auth_client_retries: parse_var("AUTH_CLIENT_RETRIES_COUNT", 3)?,
            auth_client_backoff_ms: parse_var("AUTH_CLIENT_BACKOFF_MS", 50)?,
            alias_generation_attempts: parse_var("ALIAS_GENERATION_ATTEMPTS", 5)?,
            db_max_connections: parse_var("DB_MAX_CONNECTIONS", 5)?,
            db_connect_timeout: parse_var("DB_CONNECT_TIMEOUT", 30)?,
        })
    }

    /// Loads the database URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `DATABASE_PATH`, turned into `sqlite://<path>?mode=rwc`
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let path = env::var("DATABASE_PATH")
            .context("DATABASE_PATH must be set when DATABASE_URL is not provided")?;

        Ok(format!("sqlite://{path}?mode=rwc"))
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is out of range or malformed.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.request_timeout_ms == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_MS must be greater than 0");
        }

        if self.http_user.is_empty() {
            anyhow::bail!("HTTP_USER must not be empty");
        }
        if self.http_password.is_empty() {
            anyhow::bail!("HTTP_PASSWORD must not be empty");
        }

        // Plaintext channel only.
        if !self.auth_client_address.starts_with("http://") {
            anyhow::bail!(
                "AUTH_CLIENT_ADDRESS must start with 'http://', got '{}'",
                self.auth_client_address
            );
        }

        if self.auth_client_timeout_ms == 0 {
            anyhow::bail!("AUTH_CLIENT_TIMEOUT_MS must be greater than 0");
        }

        if !(1..=10).contains(&self.auth_client_retries) {
            anyhow::bail!(
                "AUTH_CLIENT_RETRIES_COUNT must be between 1 and 10, got {}",
                self.auth_client_retries
            );
        }

        let auth_budget = self.retry_policy().worst_case_duration();
        if auth_budget >= self.request_timeout() {
            anyhow::bail!(
                "AUTH_CLIENT_RETRIES_COUNT={} with AUTH_CLIENT_TIMEOUT_MS={} and AUTH_CLIENT_BACKOFF_MS={} \
                 can take up to {}ms, which does not fit in REQUEST_TIMEOUT_MS={}",
                self.auth_client_retries,
                self.auth_client_timeout_ms,
                self.auth_client_backoff_ms,
                auth_budget.as_millis(),
                self.request_timeout_ms
            );
        }

        if self.alias_generation_attempts == 0 {
            anyhow::bail!("ALIAS_GENERATION_ATTEMPTS must be at least 1");
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn auth_client_timeout(&self) -> Duration {
        Duration::from_millis(self.auth_client_timeout_ms)
    }

    /// Retry budget for the authorization client.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.auth_client_retries,
            self.auth_client_timeout(),
            Duration::from_millis(self.auth_client_backoff_ms),
        )
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        for line in self.summary() {
            tracing::info!("  {line}");
        }
    }

    /// Summary lines logged at startup. The password never appears.
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!("Environment: {}", self.environment),
            format!("Listen address: {}", self.listen_addr),
            format!("Database: {}", self.database_url),
            format!(
                "Database pool: {} connections, acquire timeout {}s",
                self.db_max_connections, self.db_connect_timeout
            ),
            format!("Request timeout: {}ms", self.request_timeout_ms),
            format!("Basic auth user: {} (id {})", self.http_user, self.http_user_id),
            format!(
                "Auth service: {} (timeout {}ms, {} attempts, backoff {}ms)",
                self.auth_client_address,
                self.auth_client_timeout_ms,
                self.auth_client_retries,
                self.auth_client_backoff_ms
            ),
            format!("Alias generation attempts: {}", self.alias_generation_attempts),
            format!("Log level: {}", self.log_level),
            format!("Log format: {}", self.log_format),
        ]
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("environment", &self.environment)
            .field("database_url", &self.database_url)
            .field("listen_addr", &self.listen_addr)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("request_timeout_ms", &self.request_timeout_ms)
            .field("http_user", &self.http_user)
            .field("http_password", &"***")
            .field("http_user_id", &self.http_user_id)
            .field("auth_client_address", &self.auth_client_address)
            .field("auth_client_timeout_ms", &self.auth_client_timeout_ms)
            .field("auth_client_retries", &self.auth_client_retries)
            .field("auth_client_backoff_ms", &self.auth_client_backoff_ms)
            .field("alias_generation_attempts", &self.alias_generation_attempts)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_connect_timeout", &self.db_connect_timeout)
            .finish()
    }
}

/// Reads `name`, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy` in `main.rs`).
pub fn load_from_env(environment: Environment) -> Result<Config> {
    let config = Config::from_env(environment)?;
    config.validate()?;
    Ok(config)
}
