//! Example: Private account balances.
//!
//! Set `COINBASE_API_KEY` and `COINBASE_API_SECRET`, or `COINBASE_BEARER_TOKEN`
//! for OAuth.
//!
//! Run with: cargo run --example account_balance

use std::time::Duration;

use coinbase_api_client::auth::Credentials;
use coinbase_api_client::rest::CoinbaseRestClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let credentials = match Credentials::from_env() {
        Some(creds) => creds,
        None => {
            println!("Set COINBASE_API_KEY and COINBASE_API_SECRET (or COINBASE_BEARER_TOKEN) to run this example.");
            return Ok(());
        }
    };
    println!("Using OAuth: {}", credentials.uses_oauth());

    let client = CoinbaseRestClient::builder()
        .credentials(credentials)
        .user_agent("coinbase-api-client-examples/account_balance")
        .timeout(Duration::from_secs(10))
        .build();

    let balances = client.fetch_balance().await?;
    for (code, balance) in &balances.balances {
        println!(
            "{}: free {} used {} total {}",
            code, balance.free, balance.used, balance.total
        );
    }

    Ok(())
}
