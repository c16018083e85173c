//! # wallet-client-api
//!
//! Shared API types for the wallet service.
//! This crate is designed to be WASM-compatible and can be used by the native
//! client as well as by a browser front end compiled through wasm-bindgen.
//!
//! ## Features
//!
//! - Request DTOs (LoginRequest, TransferRequest, etc.)
//! - Response DTOs (UserProfile, LoginData)
//! - The uniform response envelope (Envelope)
//! - Status codes understood by the client (StatusCode)
//!
//! ## Example
//!
//! ```rust
//! use wallet_client_api::{Envelope, LoginRequest};
//!
//! let _request = LoginRequest {
//!     identifier: "user@example.com".to_string(),
//!     password: "password123".to_string(),
//! };
//!
//! let envelope: Envelope = serde_json::from_str(r#"{"message":"ok"}"#).unwrap();
//! assert_eq!(envelope.message(), Some("ok"));
//! ```

pub mod envelope;
pub mod error;
pub mod requests;
pub mod responses;

// Re-exports for convenient access
pub use envelope::{Envelope, StatusCode, is_truthy};
pub use error::ErrorBody;
pub use requests::*;
pub use responses::*;
