//! Private REST API endpoints (authentication required).

use crate::error::CoinbaseError;
use crate::rest::CoinbaseRestClient;
use crate::rest::endpoints::private;
use crate::rest::request::Params;
use crate::types::{Balances, parse_balances};

impl CoinbaseRestClient {
    /// Get the balances of all accounts.
    ///
    /// Requires either an API key and secret or a bearer token. Missing
    /// credentials are reported before any request is sent.
    pub async fn fetch_balance(&self) -> Result<Balances, CoinbaseError> {
        let data = self.private_get(private::ACCOUNTS, &Params::new()).await?;
        parse_balances(&data, self.currency_codes())
    }
}
