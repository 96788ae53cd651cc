//! Price quotes and the ticker assembled from them.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::{Duration, OffsetDateTime};

use crate::error::CoinbaseError;
use crate::types::accessors::{safe_decimal, safe_str};

/// Which price endpoint to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceKind {
    /// Price a user pays to buy, `prices/{symbol}/buy`.
    Buy,
    /// Price a user receives when selling, `prices/{symbol}/sell`.
    Sell,
    /// Current spot price, `prices/{symbol}/spot`.
    Spot,
}

impl std::fmt::Display for PriceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceKind::Buy => write!(f, "buy"),
            PriceKind::Sell => write!(f, "sell"),
            PriceKind::Spot => write!(f, "spot"),
        }
    }
}

/// A single price quote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Base currency, e.g. `BTC`.
    pub base: Option<String>,
    /// Quote currency, e.g. `USD`.
    pub currency: Option<String>,
    /// Quoted price.
    pub amount: Option<Decimal>,
    /// The raw quote.
    pub info: Value,
}

impl PriceQuote {
    /// Normalize an unwrapped price payload.
    pub fn from_data(data: &Value) -> Self {
        Self {
            base: safe_str(data, "base").map(str::to_string),
            currency: safe_str(data, "currency").map(str::to_string),
            amount: safe_decimal(data, "amount"),
            info: data.clone(),
        }
    }
}

/// The raw quotes a ticker was built from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerInfo {
    /// Raw buy quote.
    pub buy: Value,
    /// Raw sell quote.
    pub sell: Value,
    /// Raw spot quote.
    pub spot: Value,
}

/// Ticker for one trading pair.
///
/// Coinbase only exposes buy, sell and spot prices; every other statistic is
/// `None` and still serialized (as `null`).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Symbol as requested by the caller.
    pub symbol: String,
    /// Milliseconds since the unix epoch, taken when the fetch started.
    pub timestamp: i64,
    /// `timestamp` in RFC 3339.
    pub datetime: String,
    /// Highest price a buyer pays, the sell quote.
    pub bid: Option<Decimal>,
    /// Lowest price a seller asks, the buy quote.
    pub ask: Option<Decimal>,
    /// Last price, the spot quote.
    pub last: Option<Decimal>,
    pub high: Option<Decimal>,
    pub low: Option<Decimal>,
    pub bid_volume: Option<Decimal>,
    pub ask_volume: Option<Decimal>,
    pub vwap: Option<Decimal>,
    pub open: Option<Decimal>,
    pub close: Option<Decimal>,
    pub previous_close: Option<Decimal>,
    pub change: Option<Decimal>,
    pub percentage: Option<Decimal>,
    pub average: Option<Decimal>,
    pub base_volume: Option<Decimal>,
    pub quote_volume: Option<Decimal>,
    /// The raw quotes.
    pub info: TickerInfo,
}

impl Ticker {
    /// Combine the three quotes of a pair into one ticker.
    pub fn from_quotes(
        symbol: impl Into<String>,
        timestamp_ms: i64,
        buy: PriceQuote,
        sell: PriceQuote,
        spot: PriceQuote,
    ) -> Result<Self, CoinbaseError> {
        Ok(Self {
            symbol: symbol.into(),
            timestamp: timestamp_ms,
            datetime: iso8601(timestamp_ms)?,
            bid: sell.amount,
            ask: buy.amount,
            last: spot.amount,
            high: None,
            low: None,
            bid_volume: None,
            ask_volume: None,
            vwap: None,
            open: None,
            close: None,
            previous_close: None,
            change: None,
            percentage: None,
            average: None,
            base_volume: None,
            quote_volume: None,
            info: TickerInfo {
                buy: buy.info,
                sell: sell.info,
                spot: spot.info,
            },
        })
    }
}

/// Format unix milliseconds as RFC 3339.
pub fn iso8601(timestamp_ms: i64) -> Result<String, CoinbaseError> {
    let datetime = OffsetDateTime::UNIX_EPOCH + Duration::milliseconds(timestamp_ms);
    Ok(datetime.format(&Rfc3339)?)
}

/// Convert a unified symbol (`BTC/USD`) into Coinbase's pair id (`BTC-USD`).
///
/// Pair ids pass through unchanged.
pub fn market_id(symbol: &str) -> String {
    symbol.replace('/', "-")
}
