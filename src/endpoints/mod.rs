//! Per-feature wrappers over [`ApiClient::send`](crate::client::ApiClient::send).
//!
//! Paths are relative to the configured base URL. Every wrapper returns the
//! envelope (or a typed payload decoded from it) and leaves notices, session
//! clearing and redirects to the client pipeline.

pub mod accounts;
pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod transactions;
pub mod user;
