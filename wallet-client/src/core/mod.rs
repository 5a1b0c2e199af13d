//! # Core Abstractions
//!
//! Error types and service traits shared by the gateway and the endpoint layer.
//!
//! ## Modules
//!
//! - **[`error`]**: [`GatewayError`], [`ApiError`], [`TransportError`], [`ConfigError`]
//! - **[`service`]**: [`WalletService`], the dependency-injection seam screens depend on
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use wallet_client::core::service::WalletService;
//! use wallet_client::services::api::WalletApi;
//!
//! # fn wire(api: WalletApi) {
//! // In production: the gateway-backed client
//! let service: Arc<dyn WalletService> = Arc::new(api);
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ConfigError, GatewayError, Result, TransportError};
pub use service::WalletService;
