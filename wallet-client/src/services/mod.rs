//! # Services
//!
//! Backend integrations built on the request gateway.

pub mod api;
