//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MAX_LOGIN_ATTEMPTS` - Wrong secrets before lockout (default: 3, range 1-100)
//! - `LOGIN_DELAY_MS` - Simulated latency before credential matching
//!   (default: 1000, max: 10000, `0` disables)
//! - `REDIRECT_DELAY_SECS` - Pause on the welcome page before the dashboard
//!   loads (default: 2, max: 60)
//! - `COOKIE_SECURE` - Mark cookies `Secure` (default: `false`)
//! - `DEV_TOOLS` - Expose `/api/dev/*` helpers (default: `false`)
//! - `RATE_LIMIT_PER_SECOND` - Seconds between token refills per client IP
//!   (default: 2, so one request every 2 seconds once the burst is spent)
//! - `RATE_LIMIT_BURST` - Requests allowed in a burst per client IP (default: 100)

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::{DEFAULT_MAX_ATTEMPTS, LoginPolicy};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Consecutive wrong secrets that lock an account.
    pub max_login_attempts: u32,
    /// Cosmetic delay applied before credential matching, in milliseconds.
    pub login_delay_ms: u64,
    /// Seconds the welcome page waits before navigating to the dashboard.
    pub redirect_delay_secs: u64,
    /// Adds the `Secure` attribute to session and remember-me cookies.
    /// Enable when the portal is served over HTTPS.
    pub cookie_secure: bool,
    /// Exposes attempt status and reset endpoints under `/api/dev`.
    pub dev_tools: bool,
    /// Seconds between rate-limit token refills per client IP.
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            max_login_attempts: DEFAULT_MAX_ATTEMPTS,
            login_delay_ms: 1000,
            redirect_delay_secs: 2,
            cookie_secure: false,
            dev_tools: false,
            rate_limit_per_second: 2,
            rate_limit_burst: 100,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            listen_addr: env::var("LISTEN").unwrap_or(defaults.listen_addr),
            log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            log_format: env::var("LOG_FORMAT").unwrap_or(defaults.log_format),
            max_login_attempts: parse_var("MAX_LOGIN_ATTEMPTS")
                .unwrap_or(defaults.max_login_attempts),
            login_delay_ms: parse_var("LOGIN_DELAY_MS").unwrap_or(defaults.login_delay_ms),
            redirect_delay_secs: parse_var("REDIRECT_DELAY_SECS")
                .unwrap_or(defaults.redirect_delay_secs),
            cookie_secure: flag_var("COOKIE_SECURE"),
            dev_tools: flag_var("DEV_TOOLS"),
            rate_limit_per_second: parse_var("RATE_LIMIT_PER_SECOND")
                .unwrap_or(defaults.rate_limit_per_second),
            rate_limit_burst: parse_var("RATE_LIMIT_BURST").unwrap_or(defaults.rate_limit_burst),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `max_login_attempts` is outside 1-100
    /// - `login_delay_ms` exceeds 10000
    /// - `redirect_delay_secs` exceeds 60
    /// - either rate limit value is zero
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

        if self.max_login_attempts == 0 || self.max_login_attempts > 100 {
            anyhow::bail!(
                "MAX_LOGIN_ATTEMPTS must be between 1 and 100, got {}",
                self.max_login_attempts
            );
        }

        if self.login_delay_ms > 10_000 {
            anyhow::bail!(
                "LOGIN_DELAY_MS is too large (max: 10000), got {}",
                self.login_delay_ms
            );
        }

        if self.redirect_delay_secs > 60 {
            anyhow::bail!(
                "REDIRECT_DELAY_SECS is too large (max: 60), got {}",
                self.redirect_delay_secs
            );
        }

        if self.rate_limit_per_second == 0 || self.rate_limit_burst == 0 {
            anyhow::bail!("RATE_LIMIT_PER_SECOND and RATE_LIMIT_BURST must be greater than 0");
        }

        Ok(())
    }

    /// Lockout policy handed to the authentication service.
    pub fn login_policy(&self) -> LoginPolicy {
        LoginPolicy {
            max_attempts: self.max_login_attempts,
            latency: Duration::from_millis(self.login_delay_ms),
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Max login attempts: {}", self.max_login_attempts);
        tracing::info!("  Login delay: {}ms", self.login_delay_ms);
        tracing::info!("  Redirect delay: {}s", self.redirect_delay_secs);
        tracing::info!("  Secure cookies: {}", self.cookie_secure);
        tracing::info!(
            "  Rate limit: 1 token every {}s, burst {}",
            self.rate_limit_per_second,
            self.rate_limit_burst
        );
        if self.dev_tools {
            tracing::warn!("  Dev tools: enabled (/api/dev exposes account status)");
        } else {
            tracing::info!("  Dev tools: disabled");
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

fn flag_var(name: &str) -> bool {
    env::var(name)
        .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
        .unwrap_or(false)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
