//! Building and signing outgoing requests.
//!
//! ## Authentication Headers
//!
//! API-key requests to private endpoints carry:
//! - `CB-ACCESS-KEY`: the API key
//! - `CB-ACCESS-SIGN`: hex HMAC-SHA256 of the canonical message
//! - `CB-ACCESS-TIMESTAMP`: the unix seconds used inside the signed message
//! - `Content-Type: application/json`
//!
//! OAuth requests carry a single `Authorization: Bearer <token>` header and
//! are never signed.

use std::collections::BTreeMap;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use url::Url;

use crate::auth::{AccessLevel, AuthMode, Credentials, TimestampProvider, resolve_auth, sign_request};
use crate::error::CoinbaseError;

/// Header carrying the API key.
pub const CB_ACCESS_KEY: HeaderName = HeaderName::from_static("cb-access-key");
/// Header carrying the request signature.
pub const CB_ACCESS_SIGN: HeaderName = HeaderName::from_static("cb-access-sign");
/// Header carrying the signing timestamp.
pub const CB_ACCESS_TIMESTAMP: HeaderName = HeaderName::from_static("cb-access-timestamp");

/// Request parameters. Sorted so query strings are stable.
pub type Params = BTreeMap<String, String>;

/// A request ready for the transport.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Absolute request URL.
    pub url: Url,
    /// HTTP method.
    pub method: Method,
    /// Authentication and content headers.
    pub headers: HeaderMap,
    /// Request body, if any.
    pub body: Option<String>,
}

/// Builds [`SignedRequest`]s from endpoint descriptions.
pub struct RequestSigner<'a> {
    base_url: &'a str,
    credentials: &'a Credentials,
    timestamps: &'a dyn TimestampProvider,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer over the given configuration.
    pub fn new(
        base_url: &'a str,
        credentials: &'a Credentials,
        timestamps: &'a dyn TimestampProvider,
    ) -> Self {
        Self {
            base_url,
            credentials,
            timestamps,
        }
    }

    /// Build the request for `path`.
    ///
    /// Credentials are checked before anything else. Params filling a `{name}`
    /// placeholder are consumed; the rest become the query string of GET and
    /// DELETE requests or the JSON body of other requests without a body.
    pub fn sign(
        &self,
        path: &str,
        access: AccessLevel,
        method: Method,
        params: &Params,
        body: Option<&str>,
    ) -> Result<SignedRequest, CoinbaseError> {
        let mode = resolve_auth(self.credentials, access)?;

        let (resolved, remaining) = implode_path(path, params)?;
        let mut request_path = format!("/{resolved}");
        let mut body = body.map(str::to_string);
        if !remaining.is_empty() {
            if method == Method::GET || method == Method::DELETE {
                let query = serde_urlencoded::to_string(&remaining)
                    .map_err(|e| CoinbaseError::InvalidRequest(e.to_string()))?;
                request_path = format!("{request_path}?{query}");
            } else if body.is_none() {
                body = Some(serde_json::to_string(&remaining)?);
            }
        }

        let url = Url::parse(&format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            request_path
        ))?;

        let mut headers = HeaderMap::new();
        match mode {
            AuthMode::OAuth { token } => {
                headers.insert(AUTHORIZATION, sensitive_value(&format!("Bearer {token}"))?);
            }
            AuthMode::Signed { api_key, secret } => {
                // One timestamp for both the signed message and the header.
                let timestamp = self.timestamps.timestamp();
                let signature = sign_request(
                    secret,
                    timestamp,
                    method.as_str(),
                    &request_path,
                    body.as_deref().unwrap_or(""),
                )?;
                headers.insert(CB_ACCESS_KEY, header_value(api_key)?);
                headers.insert(CB_ACCESS_SIGN, sensitive_value(&signature)?);
                headers.insert(CB_ACCESS_TIMESTAMP, HeaderValue::from(timestamp));
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            }
            AuthMode::Anonymous => {}
        }

        tracing::debug!(
            method = %method,
            path = %request_path,
            auth = mode.label(),
            "Built request"
        );

        Ok(SignedRequest {
            url,
            method,
            headers,
            body,
        })
    }
}

/// Fill `{name}` placeholders in `path` from `params`.
///
/// Returns the filled path and the params no placeholder used.
pub fn implode_path(path: &str, params: &Params) -> Result<(String, Params), CoinbaseError> {
    let mut remaining = params.clone();
    let mut resolved = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(start) = rest.find('{') {
        let end = rest[start..]
            .find('}')
            .map(|offset| start + offset)
            .ok_or_else(|| {
                CoinbaseError::InvalidRequest(format!("unterminated placeholder in `{path}`"))
            })?;
        let name = &rest[start + 1..end];
        let value = params.get(name).ok_or_else(|| {
            CoinbaseError::InvalidRequest(format!("missing parameter `{name}` for `{path}`"))
        })?;
        remaining.remove(name);

        resolved.push_str(&rest[..start]);
        resolved.push_str(value);
        rest = &rest[end + 1..];
    }
    resolved.push_str(rest);

    Ok((resolved, remaining))
}

fn header_value(value: &str) -> Result<HeaderValue, CoinbaseError> {
    HeaderValue::from_str(value)
        .map_err(|e| CoinbaseError::InvalidRequest(format!("invalid header value: {e}")))
}

fn sensitive_value(value: &str) -> Result<HeaderValue, CoinbaseError> {
    let mut header = header_value(value)?;
    header.set_sensitive(true);
    Ok(header)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedTimestamp;

    const BASE: &str = "https://api.coinbase.com/v2";

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_implode_path() {
        let (path, rest) = implode_path(
            "prices/{symbol}/spot",
            &params(&[("symbol", "BTC-USD"), ("date", "2017-01-01")]),
        )
        .unwrap();
        assert_eq!(path, "prices/BTC-USD/spot");
        assert_eq!(rest, params(&[("date", "2017-01-01")]));
    }

    #[test]
    fn test_implode_path_missing_param() {
        let err = implode_path("prices/{symbol}/spot", &Params::new()).unwrap_err();
        assert!(matches!(err, CoinbaseError::InvalidRequest(_)));
    }

    #[test]
    fn test_signed_request_golden() {
        let creds = Credentials::new("key", "s3cr3t");
        let clock = FixedTimestamp(1_000_000_000);
        let signer = RequestSigner::new(BASE, &creds, &clock);

        let request = signer
            .sign("accounts", AccessLevel::Private, Method::GET, &Params::new(), None)
            .unwrap();

        assert_eq!(request.url.as_str(), "https://api.coinbase.com/v2/accounts");
        assert_eq!(request.headers[&CB_ACCESS_KEY], "key");
        assert_eq!(request.headers[&CB_ACCESS_TIMESTAMP], "1000000000");
        assert_eq!(
            request.headers[&CB_ACCESS_SIGN],
            "9415d33faf205dbeb0bd8c8d1e3815440272edf4c61e957f8d0b794eefbdc05e"
        );
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert!(request.headers.get(AUTHORIZATION).is_none());
        assert!(request.body.is_none());
    }

    #[test]
    fn test_oauth_request_is_not_signed() {
        let creds = Credentials::from_parts(
            Some("key".to_string()),
            Some("secret".to_string()),
            Some("token".to_string()),
        );
        let clock = FixedTimestamp(1);
        let signer = RequestSigner::new(BASE, &creds, &clock);

        for access in [AccessLevel::Public, AccessLevel::Private] {
            let request = signer
                .sign("accounts", access, Method::GET, &Params::new(), None)
                .unwrap();
            assert_eq!(request.headers.len(), 1);
            assert_eq!(request.headers[AUTHORIZATION], "Bearer token");
            assert!(request.headers.get(&CB_ACCESS_SIGN).is_none());
        }
    }

    #[test]
    fn test_public_request_has_no_auth_headers() {
        let creds = Credentials::new("key", "secret");
        let clock = FixedTimestamp(1);
        let signer = RequestSigner::new(BASE, &creds, &clock);

        let request = signer
            .sign(
                "prices/{symbol}/buy",
                AccessLevel::Public,
                Method::GET,
                &params(&[("symbol", "ETH-USD")]),
                None,
            )
            .unwrap();
        assert!(request.headers.is_empty());
        assert_eq!(
            request.url.as_str(),
            "https://api.coinbase.com/v2/prices/ETH-USD/buy"
        );
    }

    #[test]
    fn test_missing_secret_fails_before_building() {
        let creds = Credentials::from_parts(Some("key".to_string()), None, None);
        let clock = FixedTimestamp(1);
        let signer = RequestSigner::new(BASE, &creds, &clock);

        let err = signer
            .sign("accounts", AccessLevel::Private, Method::GET, &Params::new(), None)
            .unwrap_err();
        assert!(matches!(err, CoinbaseError::MissingCredential("secret")));
    }

    #[test]
    fn test_query_is_part_of_signed_path() {
        let creds = Credentials::new("key", "secret");
        let clock = FixedTimestamp(42);
        let signer = RequestSigner::new(BASE, &creds, &clock);

        let request = signer
            .sign(
                "accounts",
                AccessLevel::Private,
                Method::GET,
                &params(&[("limit", "5")]),
                None,
            )
            .unwrap();

        let expected = sign_request("secret", 42, "GET", "/accounts?limit=5", "").unwrap();
        assert_eq!(request.url.query(), Some("limit=5"));
        assert_eq!(request.headers[&CB_ACCESS_SIGN], expected.as_str());
    }

    #[test]
    fn test_post_params_become_body() {
        let creds = Credentials::new("key", "secret");
        let clock = FixedTimestamp(42);
        let signer = RequestSigner::new(BASE, &creds, &clock);

        let request = signer
            .sign(
                "accounts",
                AccessLevel::Private,
                Method::POST,
                &params(&[("name", "vault")]),
                None,
            )
            .unwrap();

        let body = request.body.unwrap();
        assert_eq!(body, r#"{"name":"vault"}"#);
        let expected = sign_request("secret", 42, "POST", "/accounts", &body).unwrap();
        assert_eq!(request.headers[&CB_ACCESS_SIGN], expected.as_str());
    }
}
