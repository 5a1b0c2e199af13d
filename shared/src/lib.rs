//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet client and the
//! payments backend (`/api/v1/*`). All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Signed-in user identity
//!   - **[`dto::wallet`]**: Wallet balances, top-ups and withdrawals
//!   - **[`dto::transactions`]**: Activity feed and expense breakdown
//!   - **[`dto::transfers`]**: Peer transfers and money requests
//!   - **[`dto::fx`]**: Currency exchange quotes and executions
//!
//! ## Wire Format
//!
//! The backend speaks **camelCase** JSON, so every struct carries
//! `#[serde(rename_all = "camelCase")]`. Amounts travel as decimal strings
//! (`"25.00"`) and are never converted to floats on the wire.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::wallet::WalletsResponse;
//!
//! let body = r#"{"wallets":[{"currency":"USD","balance":"120.50"}]}"#;
//! let wallets: WalletsResponse = serde_json::from_str(body).unwrap();
//! assert_eq!(wallets.balance_of("USD"), Some(120.5));
//! ```

pub mod dto;

// Re-export commonly used types for convenience
pub use dto::*;
