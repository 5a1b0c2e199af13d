//! # Wallet API Client Module
//!
//! Typed endpoints of the wallet/payments backend, all issued through the
//! [`RequestGateway`](crate::gateway::RequestGateway).
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs           - Module exports and documentation
//! ├── client.rs        - WalletApi struct and WalletService implementation
//! ├── wallet.rs        - Balances, top-ups, withdrawals
//! ├── transactions.rs  - Activity feed and expenses breakdown
//! ├── transfers.rs     - Transfers and money requests
//! └── fx.rs            - Exchange quotes and executions
//! ```
//!
//! Inputs are validated locally before anything is sent; a failed check is
//! returned as [`GatewayError::InvalidRequest`](crate::core::error::GatewayError::InvalidRequest).

pub mod client;
pub mod fx;
pub mod transactions;
pub mod transfers;
pub mod wallet;

pub use client::WalletApi;
pub use transactions::TransactionQuery;
