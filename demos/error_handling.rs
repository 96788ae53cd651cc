//! Example: Working with CoinbaseError and ErrorKind.
//!
//! Run with: cargo run --example error_handling

use coinbase_api_client::rest::{ResponseOutcome, classify_response};
use coinbase_api_client::{ApiError, CoinbaseError, ErrorKind};

fn main() {
    let api_error = ApiError::new(429, "Too many requests");
    println!("API error: {}", api_error);
    println!("Kind: {}", api_error.kind);

    let err = CoinbaseError::Api(api_error);
    match err.kind() {
        Some(ErrorKind::RateLimit) => println!("Matched rate limit error"),
        Some(kind) => println!("Other classified error: {kind}"),
        None => println!("Transport or local error"),
    }

    for status in [200, 401, 404, 503, 418] {
        let body = r#"{"errors":[{"id":"example","message":"example failure"}]}"#;
        match classify_response(status, body) {
            ResponseOutcome::Success(_) => println!("{status}: success"),
            ResponseOutcome::Failed(error) => println!("{status}: {}", error.kind),
        }
    }
}
