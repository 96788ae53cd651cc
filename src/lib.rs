//! # Coinbase Client
//!
//! An async Rust client library for the Coinbase v2 REST API.
//!
//! ## Features
//!
//! - API-key HMAC-SHA256 signing and OAuth bearer-token authentication
//! - Status-code classification into a small error taxonomy
//! - Normalized currency, balance and ticker records
//! - Financial precision with `rust_decimal`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinbase_api_client::rest::CoinbaseRestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseRestClient::new();
//!     let currencies = client.fetch_currencies().await?;
//!     println!("{} currencies", currencies.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinbaseError, ErrorKind};
pub use types::{Balance, Balances, Currency, Ticker};

/// Result type alias using CoinbaseError
pub type Result<T> = std::result::Result<T, CoinbaseError>;
