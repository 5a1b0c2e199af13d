use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::core::error::GatewayError;

/// Deduplication key for a state-mutating call.
///
/// Generate one per logical user action (one button press) and pass the same
/// key to every retry of that action so the backend applies it at most once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdempotencyKey(String);

impl IdempotencyKey {
    /// Fresh `idem_<unique>` key.
    pub fn new() -> Self {
        Self(lib_utils::new_idempotency_key())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for IdempotencyKey {
    fn default() -> Self {
        Self::new()
    }
}

impl From<String> for IdempotencyKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for IdempotencyKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl std::fmt::Display for IdempotencyKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-call request envelope.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON payload; `None` sends no body and no content type.
    pub body: Option<Value>,
    /// Caller headers, merged under the computed ones.
    pub headers: HeaderMap,
    /// Attach an `Idempotency-Key`.
    pub idempotent: bool,
    /// Key to use when `idempotent`; a fresh one is generated when absent.
    pub idempotency_key: Option<IdempotencyKey>,
    pub cancel: Option<CancellationToken>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
            idempotent: false,
            idempotency_key: None,
            cancel: None,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    /// `POST` with a serialized JSON body.
    pub fn post<B: Serialize>(body: &B) -> Result<Self, GatewayError> {
        Self::new(Method::POST).json(body)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, GatewayError> {
        let value = serde_json::to_value(body)
            .map_err(|e| GatewayError::InvalidRequest(format!("body is not serializable: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn header(mut self, name: &str, value: &str) -> Result<Self, GatewayError> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| GatewayError::InvalidRequest(format!("invalid header name {:?}", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| GatewayError::InvalidRequest(format!("invalid value for header {}", name)))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    pub fn idempotent(mut self) -> Self {
        self.idempotent = true;
        self
    }

    /// Mark the call idempotent and reuse `key` for it.
    pub fn idempotency_key(mut self, key: &IdempotencyKey) -> Self {
        self.idempotent = true;
        self.idempotency_key = Some(key.clone());
        self
    }

    /// Abort the call when `token` is cancelled.
    pub fn cancel_on(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }
}
