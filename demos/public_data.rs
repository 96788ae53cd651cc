//! Example: Fetching public data from Coinbase.
//!
//! This example fetches currencies and a ticker without authentication.
//!
//! Run with: cargo run --example public_data

use coinbase_api_client::rest::CoinbaseRestClient;
use coinbase_api_client::types::PriceKind;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Create a client for public endpoints (no credentials needed)
    let client = CoinbaseRestClient::new();

    println!("=== Currencies ===");
    let currencies = client.fetch_currencies().await?;
    for (code, currency) in currencies.iter().take(5) {
        println!(
            "{}: {} (min {:?})",
            code,
            currency.name.as_deref().unwrap_or("?"),
            currency.min_amount()
        );
    }

    println!("\n=== Spot Price ===");
    let spot = client.get_price("ETH/USD", PriceKind::Spot).await?;
    println!("ETH/USD: {:?}", spot.amount);

    println!("\n=== Ticker ===");
    let ticker = client.fetch_ticker("BTC/USD").await?;
    println!("{} at {}", ticker.symbol, ticker.datetime);
    println!("  bid:  {:?}", ticker.bid);
    println!("  ask:  {:?}", ticker.ask);
    println!("  last: {:?}", ticker.last);

    Ok(())
}
