//! Coinbase REST API endpoint constants.
//!
//! Paths are relative to the base URL; `{name}` segments are filled in from
//! request parameters.

/// Base URL for the Coinbase v2 REST API, public and private alike.
pub const COINBASE_BASE_URL: &str = "https://api.coinbase.com/v2";

/// Public endpoints (no authentication required).
pub mod public {
    /// List known currencies.
    pub const CURRENCIES: &str = "currencies";
    /// Buy price of a pair.
    pub const PRICES_BUY: &str = "prices/{symbol}/buy";
    /// Sell price of a pair.
    pub const PRICES_SELL: &str = "prices/{symbol}/sell";
    /// Spot price of a pair.
    pub const PRICES_SPOT: &str = "prices/{symbol}/spot";
}

/// Private endpoints (authentication required).
pub mod private {
    /// List the user's accounts.
    pub const ACCOUNTS: &str = "accounts";
}
