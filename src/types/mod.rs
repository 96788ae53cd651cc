//! Domain records normalized from Coinbase payloads.

pub mod accessors;
pub mod balance;
pub mod currency;
pub mod currency_code;
pub mod ticker;

pub use balance::{Balance, Balances, parse_balances};
pub use currency::{Currency, CurrencyLimits, MinMax, parse_currencies};
pub use currency_code::CurrencyCodes;
pub use ticker::{PriceKind, PriceQuote, Ticker, TickerInfo, market_id};
