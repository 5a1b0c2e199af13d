//! # Utilities Library
//!
//! Shared utility functions for environment variables, request identifiers,
//! time, and validation.

pub mod envs;
pub mod ids;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_flag, get_env_or, get_env_parse_opt};
pub use ids::{new_idempotency_key, new_request_id};
pub use time::{current_month, now_utc, parse_month};
pub use validation::{format_amount, format_decimal, validate_currency, validate_email, validate_not_empty};
