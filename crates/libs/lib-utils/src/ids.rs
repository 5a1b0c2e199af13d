//! # Request Identifiers
//!
//! Per-call trace identifiers and idempotency keys sent to the backend.
//!
//! Both are `<prefix>_<millis>_<uuid-simple>`: the timestamp keeps them roughly
//! sortable in server logs, the v4 UUID makes them unique.

use chrono::Utc;
use uuid::Uuid;

/// Prefix of every `X-Request-Id` value.
pub const REQUEST_ID_PREFIX: &str = "req_";

/// Prefix of every generated `Idempotency-Key` value.
pub const IDEMPOTENCY_KEY_PREFIX: &str = "idem_";

fn unique_token() -> String {
    format!("{}_{}", Utc::now().timestamp_millis(), Uuid::new_v4().simple())
}

/// Generate a fresh request identifier (`req_<unique>`).
pub fn new_request_id() -> String {
    format!("{REQUEST_ID_PREFIX}{}", unique_token())
}

/// Generate a fresh idempotency key (`idem_<unique>`).
pub fn new_idempotency_key() -> String {
    format!("{IDEMPOTENCY_KEY_PREFIX}{}", unique_token())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_ids_are_prefixed_and_unique() {
        let a = new_request_id();
        let b = new_request_id();
        assert!(a.starts_with("req_"));
        assert!(a.len() > REQUEST_ID_PREFIX.len());
        assert_ne!(a, b);
    }

    #[test]
    fn idempotency_keys_are_prefixed_and_unique() {
        let a = new_idempotency_key();
        let b = new_idempotency_key();
        assert!(a.starts_with("idem_"));
        assert_ne!(a, b);
    }
}
