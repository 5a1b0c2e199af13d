//! # Client Configuration
//!
//! Configuration loaded from environment variables, validated on startup to
//! fail fast if misconfigured.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `WALLET_API_BASE_URL` | `http://127.0.0.1:3001` | Backend origin all paths are resolved against |
//! | `WALLET_API_TIMEOUT_SECS` | unset | Client-side request timeout; unset means none |
//! | `WALLET_LOG_DIR` | `logs` | Directory for the rolling log file |
//! | `RUST_LOG` | `wallet_client=info,warn` | Log filter |
//! | `WALLET_LOG_STDERR` | `0` | Mirror logs to stderr |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use wallet_client::config::{client_config, init_config};
//!
//! init_config().expect("invalid configuration");
//! let base = &client_config().api_base_url;
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use lib_utils::envs::{get_env_flag, get_env_or, get_env_parse_opt};

use crate::core::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3001";
const DEFAULT_LOG_FILTER: &str = "wallet_client=info,warn";

/// Wallet client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Backend origin, without trailing slash.
    pub api_base_url: String,

    /// Timeout applied by the HTTP client; `None` leaves requests unbounded.
    ///
    /// Valid range when set: 1-300 seconds.
    pub request_timeout: Option<Duration>,

    pub log_dir: PathBuf,
    pub log_level: String,
    pub log_to_stderr: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: None,
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: false,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = get_env_or("WALLET_API_BASE_URL", DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        let request_timeout = get_env_parse_opt::<u64>("WALLET_API_TIMEOUT_SECS")?
            .map(Duration::from_secs);

        Ok(Self {
            api_base_url,
            request_timeout,
            log_dir: PathBuf::from(get_env_or("WALLET_LOG_DIR", "logs")),
            log_level: get_env_or("RUST_LOG", DEFAULT_LOG_FILTER),
            log_to_stderr: get_env_flag("WALLET_LOG_STDERR", false),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "WALLET_API_BASE_URL must start with http:// or https://, got {:?}",
                self.api_base_url
            )));
        }

        if let Some(timeout) = self.request_timeout {
            let secs = timeout.as_secs();
            if !(1..=300).contains(&secs) {
                return Err(ConfigError::Invalid(
                    "WALLET_API_TIMEOUT_SECS must be between 1 and 300".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<ClientConfig> = OnceLock::new();

/// Load, validate and install the global configuration.
///
/// # Errors
///
/// Returns an error if an environment variable is malformed, validation
/// fails, or the config has already been initialized.
pub fn init_config() -> Result<&'static ClientConfig, ConfigError> {
    let config = ClientConfig::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    Ok(client_config())
}

/// Global configuration, or the defaults if [`init_config()`] was never called.
pub fn client_config() -> &'static ClientConfig {
    CONFIG.get_or_init(ClientConfig::default)
}
