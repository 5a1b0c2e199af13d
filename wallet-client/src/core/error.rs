//! # Common Error Types
//!
//! Error handling for the wallet client.
//!
//! Every gateway call resolves to [`GatewayError`] on failure. Errors are
//! categorized by their source:
//!
//! - **Transport**: the HTTP call itself failed (DNS, connection refused, timeout
//!   from the underlying client). Carried unchanged inside [`TransportError`].
//! - **Api**: the backend answered with a non-2xx status. [`ApiError`] keeps the
//!   resolved message, the status code and the parsed body. A 401 additionally
//!   clears the session and opens the sign-in prompt before the error is returned.
//! - **Decode**: a typed call expected JSON of a given shape and got something else.
//! - **InvalidRequest**: the request could not be built (bad header value,
//!   failed local validation).
//! - **Cancelled**: the caller's cancellation token fired before completion.
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use wallet_client::core::error::GatewayError;
//!
//! fn banner(err: &GatewayError) -> String {
//!     match err.status() {
//!         Some(404) => "Not found".to_string(),
//!         _ => err.user_message(),
//!     }
//! }
//! ```

use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

use crate::gateway::ResponseBody;

/// Convenience type alias for `Result<T, GatewayError>`.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Failure of the underlying HTTP primitive.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Error raised by `reqwest` (connect, timeout, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Error raised by a non-reqwest transport.
    #[error("{0}")]
    Other(String),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}

/// A non-2xx response from the backend.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Server-supplied message, or a fallback naming the path and status.
    pub message: String,
    pub status: StatusCode,
    /// Parsed response body (JSON or raw text).
    pub data: ResponseBody,
}

impl ApiError {
    /// Build an error from a failed response.
    ///
    /// The message is taken from `error.message`, then `message`, and falls back to
    /// `When fetching <path>, the response was [<status>] <reason>`.
    pub fn from_response(path: &str, status: StatusCode, data: ResponseBody) -> Self {
        let message = server_message(&data).unwrap_or_else(|| {
            let mut message = format!("When fetching {}, the response was [{}]", path, status.as_u16());
            if let Some(reason) = status.canonical_reason() {
                message.push(' ');
                message.push_str(reason);
            }
            message
        });

        Self {
            message,
            status,
            data,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }
}

fn server_message(data: &ResponseBody) -> Option<String> {
    let json = data.as_json()?;
    let non_empty = |v: Option<&Value>| {
        v.and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    non_empty(json.get("error").and_then(|e| e.get("message")))
        .or_else(|| non_empty(json.get("message")))
}

/// Error type for every request issued through the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP call failed before a response was received.
    #[error("Network error: {0}")]
    Transport(#[from] TransportError),

    /// The backend answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response did not have the expected content type or shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The request could not be built or failed local validation.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The caller cancelled the request.
    #[error("Request cancelled")]
    Cancelled,
}

impl GatewayError {
    /// HTTP status of an [`ApiError`], `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            GatewayError::Api(e) => Some(e.status_code()),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Api(e) if e.is_unauthorized())
    }

    /// Message suitable for an inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            GatewayError::Api(e) if e.is_unauthorized() => "Please sign in again".to_string(),
            GatewayError::Api(e) => e.message.clone(),
            GatewayError::Transport(e) if e.is_timeout() => {
                "The server took too long to respond".to_string()
            }
            GatewayError::Transport(_) => "Network unavailable".to_string(),
            GatewayError::InvalidRequest(msg) => msg.clone(),
            GatewayError::Decode(_) => "Unexpected response from server".to_string(),
            GatewayError::Cancelled => "Request cancelled".to_string(),
        }
    }
}

impl From<String> for GatewayError {
    fn from(msg: String) -> Self {
        GatewayError::InvalidRequest(msg)
    }
}

/// Configuration loading or validation failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} has an invalid value")]
    WrongFormat(&'static str),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Config has already been initialized")]
    AlreadyInitialized,
}

impl From<lib_utils::envs::Error> for ConfigError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) | lib_utils::envs::Error::WrongFormat(name) => {
                ConfigError::WrongFormat(name)
            }
        }
    }
}
