//! # Wallet Client - Library Root
//!
//! Client side of the mobile wallet/payments backend: a single request
//! gateway every screen funnels through, plus typed endpoints for balances,
//! activity, expenses, top-ups, withdrawals, transfers and currency exchange.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  screens (application)                                   │
//! └───────────────┬──────────────────────────────────────────┘
//!                 │ WalletService (core::service)
//! ┌───────────────▼──────────────────────────────────────────┐
//! │  services::api::WalletApi  - typed /api/v1 endpoints      │
//! ├──────────────────────────────────────────────────────────┤
//! │  gateway::RequestGateway   - request id, bearer auth,     │
//! │                              idempotency key, 401 reset  │
//! ├──────────────────────────────────────────────────────────┤
//! │  gateway::HttpTransport    - reqwest in production        │
//! └───────────────┬──────────────────────────────────────────┘
//!                 │ HTTP
//!                 ▼
//!         Wallet backend (/api/v1)
//! ```
//!
//! The gateway depends on two injected collaborators from [`session`]: a
//! [`SessionProvider`](session::SessionProvider) it reads the bearer token
//! from, and an [`AuthPrompt`](session::AuthPrompt) it opens when the backend
//! rejects the session.
//!
//! ## Module Structure
//!
//! - **config**: environment configuration (`ClientConfig`)
//! - **core**: error types and the `WalletService` trait
//! - **gateway**: the request gateway and its transport seam
//! - **logging**: `tracing` subscriber setup
//! - **services**: typed backend endpoints
//! - **session**: session store and sign-in prompt signal

pub mod config;
pub mod core;
pub mod gateway;
pub mod logging;
pub mod services;
pub mod session;

pub use crate::core::error::{GatewayError, Result};
pub use gateway::{IdempotencyKey, RequestGateway, RequestOptions};
