//! Trait definition for the Coinbase REST API client.
//!
//! This module provides the `CoinbaseClient` trait which abstracts the REST
//! operations, so callers can swap in mocks or wrap the client.
//!
//! # Example
//!
//! ```rust,ignore
//! use coinbase_api_client::rest::{CoinbaseClient, CoinbaseRestClient};
//!
//! async fn show_spot<C: CoinbaseClient>(client: &C) -> Result<(), coinbase_api_client::CoinbaseError> {
//!     let ticker = client.fetch_ticker("BTC/USD").await?;
//!     println!("Spot: {:?}", ticker.last);
//!     Ok(())
//! }
//! ```

use std::collections::HashMap;
use std::future::Future;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseRestClient;
use crate::types::{Balances, Currency, PriceKind, PriceQuote, Ticker};

/// Trait defining the Coinbase REST API operations.
///
/// All methods are async and return `Result<T, CoinbaseError>`.
pub trait CoinbaseClient: Send + Sync {
    /// Get all currencies, keyed by common code.
    fn fetch_currencies(
        &self,
    ) -> impl Future<Output = Result<HashMap<String, Currency>, CoinbaseError>> + Send;

    /// Get one price quote for a pair.
    fn get_price(
        &self,
        symbol: &str,
        kind: PriceKind,
    ) -> impl Future<Output = Result<PriceQuote, CoinbaseError>> + Send;

    /// Get a ticker for a pair.
    fn fetch_ticker(
        &self,
        symbol: &str,
    ) -> impl Future<Output = Result<Ticker, CoinbaseError>> + Send;

    /// Get account balances.
    fn fetch_balance(&self) -> impl Future<Output = Result<Balances, CoinbaseError>> + Send;
}

impl CoinbaseClient for CoinbaseRestClient {
    async fn fetch_currencies(&self) -> Result<HashMap<String, Currency>, CoinbaseError> {
        CoinbaseRestClient::fetch_currencies(self).await
    }

    async fn get_price(&self, symbol: &str, kind: PriceKind) -> Result<PriceQuote, CoinbaseError> {
        CoinbaseRestClient::get_price(self, symbol, kind).await
    }

    async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker, CoinbaseError> {
        CoinbaseRestClient::fetch_ticker(self, symbol).await
    }

    async fn fetch_balance(&self) -> Result<Balances, CoinbaseError> {
        CoinbaseRestClient::fetch_balance(self).await
    }
}
