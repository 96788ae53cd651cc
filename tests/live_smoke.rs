use coinbase_api_client::auth::Credentials;
use coinbase_api_client::rest::CoinbaseRestClient;

fn live_tests_enabled() -> bool {
    std::env::var("COINBASE_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = CoinbaseRestClient::new();
    let currencies = client.fetch_currencies().await?;
    assert!(currencies.contains_key("USD"));

    let ticker = client.fetch_ticker("BTC/USD").await?;
    assert!(ticker.last.is_some());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match Credentials::from_env() {
        Some(creds) => creds,
        None => return Ok(()),
    };
    let client = CoinbaseRestClient::builder().credentials(credentials).build();

    let balances = client.fetch_balance().await?;
    assert!(balances.info.is_array());

    Ok(())
}
