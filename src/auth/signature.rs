//! HMAC-SHA256 signature generation for Coinbase API authentication.
//!
//! Coinbase private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA256(timestamp + METHOD + requestPath + body, api_secret))
//! ```
//!
//! The timestamp is the same value sent in the `CB-ACCESS-TIMESTAMP` header,
//! the method is upper case, and the body is empty for requests without one.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::CoinbaseError;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical message that gets signed.
pub fn canonical_message(timestamp: i64, method: &str, request_path: &str, body: &str) -> String {
    format!(
        "{}{}{}{}",
        timestamp,
        method.to_ascii_uppercase(),
        request_path,
        body
    )
}

/// Sign a request for Coinbase's private API.
///
/// # Arguments
///
/// * `secret` - The API secret, used as the raw HMAC key
/// * `timestamp` - Unix seconds, identical to the value sent in the header
/// * `method` - HTTP method, upper-cased before signing
/// * `request_path` - Path with placeholders filled in (e.g., "/accounts")
/// * `body` - Request body, empty string when there is none
///
/// # Returns
///
/// Hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use coinbase_api_client::auth::sign_request;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let signature = sign_request("s3cr3t", 1_000_000_000, "GET", "/accounts", "")?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    secret: &str,
    timestamp: i64,
    method: &str,
    request_path: &str,
    body: &str,
) -> Result<String, CoinbaseError> {
    let message = canonical_message(timestamp, method, request_path, body);

    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| CoinbaseError::InvalidRequest(format!("Invalid HMAC key: {e}")))?;
    mac.update(message.as_bytes());

    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_message() {
        assert_eq!(
            canonical_message(1_000_000_000, "get", "/accounts", ""),
            "1000000000GET/accounts"
        );
        assert_eq!(
            canonical_message(5, "POST", "/orders", r#"{"a":1}"#),
            r#"5POST/orders{"a":1}"#
        );
    }

    #[test]
    fn test_signature_golden_value() {
        let signature = sign_request("s3cr3t", 1_000_000_000, "GET", "/accounts", "").unwrap();
        assert_eq!(
            signature,
            "9415d33faf205dbeb0bd8c8d1e3815440272edf4c61e957f8d0b794eefbdc05e"
        );
    }

    #[test]
    fn test_signature_consistency() {
        let sig1 = sign_request("my_secret", 12345, "GET", "/accounts", "").unwrap();
        let sig2 = sign_request("my_secret", 12345, "GET", "/accounts", "").unwrap();
        assert_eq!(sig1, sig2);
        assert_eq!(sig1.len(), 64);
        assert!(sig1.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_signature_changes_with_each_input() {
        let base = sign_request("my_secret", 12345, "GET", "/accounts", "").unwrap();

        let variants = [
            sign_request("other_secret", 12345, "GET", "/accounts", "").unwrap(),
            sign_request("my_secret", 12346, "GET", "/accounts", "").unwrap(),
            sign_request("my_secret", 12345, "POST", "/accounts", "").unwrap(),
            sign_request("my_secret", 12345, "GET", "/currencies", "").unwrap(),
            sign_request("my_secret", 12345, "GET", "/accounts", "{}").unwrap(),
        ];
        for variant in variants {
            assert_ne!(base, variant);
        }
    }

    #[test]
    fn test_method_case_does_not_matter() {
        let lower = sign_request("my_secret", 1, "get", "/accounts", "").unwrap();
        let upper = sign_request("my_secret", 1, "GET", "/accounts", "").unwrap();
        assert_eq!(lower, upper);
    }
}
