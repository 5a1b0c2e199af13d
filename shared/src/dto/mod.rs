//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the wallet/payments backend.
//!
//! ## Module Organization
//!
//! - [`auth`] - Signed-in user identity
//! - [`wallet`] - `GET /api/v1/wallets`, top-ups and withdrawals
//! - [`transactions`] - `GET /api/v1/transactions`, `GET /api/v1/expenses`
//! - [`transfers`] - `POST /api/v1/transfers`, `POST /api/v1/transfer-requests`
//! - [`fx`] - `GET /api/v1/fx/quote`, `POST /api/v1/fx/exchanges`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/v1/wallets/topups
//! Content-Type: application/json
//! Idempotency-Key: idem_1717171717_9f2c...
//!
//! {
//!   "amount": "25.00",
//!   "currency": "USD",
//!   "method": "card",
//!   "sourceRef": "MOCK_CARD_4242"
//! }
//! ```

pub mod auth;
pub mod fx;
pub mod receipt;
pub mod transactions;
pub mod transfers;
pub mod wallet;

pub use auth::*;
pub use fx::*;
pub use receipt::*;
pub use transactions::*;
pub use transfers::*;
pub use wallet::*;

/// Parse a decimal amount string, treating malformed values as zero.
pub(crate) fn amount_value(amount: &str) -> f64 {
    amount.trim().parse::<f64>().ok().filter(|v| v.is_finite()).unwrap_or(0.0)
}

/// Accept an amount sent either as a JSON string or a JSON number.
pub(crate) fn de_amount<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok("0".to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected amount as string or number, got {other}"
        ))),
    }
}
