//! Public REST API endpoints (no authentication required).

use std::collections::HashMap;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseRestClient;
use crate::rest::endpoints::public;
use crate::rest::request::Params;
use crate::types::{Currency, PriceKind, PriceQuote, Ticker, market_id, parse_currencies};

impl CoinbaseRestClient {
    /// Get all currencies known to Coinbase, keyed by common code.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::rest::CoinbaseRestClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseRestClient::new();
    ///     let currencies = client.fetch_currencies().await?;
    ///     println!("BTC minimum: {:?}", currencies["BTC"].min_amount());
    ///     Ok(())
    /// }
    /// ```
    pub async fn fetch_currencies(&self) -> Result<HashMap<String, Currency>, CoinbaseError> {
        let data = self.public_get(public::CURRENCIES, &Params::new()).await?;
        parse_currencies(&data, self.currency_codes())
    }

    /// Get one price quote for a pair.
    ///
    /// # Arguments
    ///
    /// * `symbol` - Unified (`BTC/USD`) or native (`BTC-USD`) pair.
    /// * `kind` - Buy, sell or spot price.
    pub async fn get_price(&self, symbol: &str, kind: PriceKind) -> Result<PriceQuote, CoinbaseError> {
        let path = match kind {
            PriceKind::Buy => public::PRICES_BUY,
            PriceKind::Sell => public::PRICES_SELL,
            PriceKind::Spot => public::PRICES_SPOT,
        };
        let mut params = Params::new();
        params.insert("symbol".to_string(), market_id(symbol));

        let data = self.public_get(path, &params).await?;
        Ok(PriceQuote::from_data(&data))
    }

    /// Get a ticker built from the buy, sell and spot prices of a pair.
    ///
    /// The three quotes are fetched concurrently; if any of them fails the
    /// whole call fails. The ticker timestamp is taken before the requests go
    /// out.
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<Ticker, CoinbaseError> {
        let timestamp = self.timestamp_provider().timestamp_millis();

        let (buy, sell, spot) = tokio::try_join!(
            self.get_price(symbol, PriceKind::Buy),
            self.get_price(symbol, PriceKind::Sell),
            self.get_price(symbol, PriceKind::Spot),
        )?;

        Ticker::from_quotes(symbol, timestamp, buy, sell, spot)
    }
}
