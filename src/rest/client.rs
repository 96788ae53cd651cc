//! Coinbase REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use reqwest_tracing::TracingMiddleware;
use serde_json::Value;

use crate::auth::{AccessLevel, Credentials, SystemTimestamp, TimestampProvider};
use crate::error::CoinbaseError;
use crate::rest::endpoints::COINBASE_BASE_URL;
use crate::rest::request::{Params, RequestSigner, SignedRequest};
use crate::rest::response::{ResponseOutcome, classify_response, unwrap_envelope};
use crate::types::CurrencyCodes;

/// The Coinbase REST API client.
///
/// Handles credential resolution, request signing, response classification
/// and envelope unwrapping. Calls are never retried by the client itself.
///
/// # Example
///
/// ```rust,no_run
/// use coinbase_api_client::rest::CoinbaseRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Create a client for public endpoints only
///     let client = CoinbaseRestClient::new();
///
///     let ticker = client.fetch_ticker("BTC/USD").await?;
///     println!("BTC/USD last: {:?}", ticker.last);
///
///     Ok(())
/// }
/// ```
///
/// For private endpoints, provide credentials:
///
/// ```rust,no_run
/// use coinbase_api_client::auth::Credentials;
/// use coinbase_api_client::rest::CoinbaseRestClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinbaseRestClient::builder()
///         .credentials(Credentials::new("api_key", "api_secret"))
///         .build();
///
///     let balance = client.fetch_balance().await?;
///     println!("Balance: {:?}", balance.total());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct CoinbaseRestClient {
    http_client: ClientWithMiddleware,
    base_url: String,
    credentials: Arc<Credentials>,
    timestamp_provider: Arc<dyn TimestampProvider>,
    currency_codes: Arc<CurrencyCodes>,
}

impl CoinbaseRestClient {
    /// Create a new client with default settings.
    ///
    /// This client can only access public endpoints.
    /// Use [`CoinbaseRestClient::builder()`] to configure credentials for private endpoints.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> CoinbaseRestClientBuilder {
        CoinbaseRestClientBuilder::new()
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The currency-code table used during normalization.
    pub fn currency_codes(&self) -> &CurrencyCodes {
        &self.currency_codes
    }

    /// The timestamp source used for signing and tickers.
    pub(crate) fn timestamp_provider(&self) -> &dyn TimestampProvider {
        self.timestamp_provider.as_ref()
    }

    /// Build the signed request for an endpoint without sending it.
    pub fn sign(
        &self,
        path: &str,
        access: AccessLevel,
        method: Method,
        params: &Params,
        body: Option<&str>,
    ) -> Result<SignedRequest, CoinbaseError> {
        RequestSigner::new(
            &self.base_url,
            &self.credentials,
            self.timestamp_provider.as_ref(),
        )
        .sign(path, access, method, params, body)
    }

    /// Send a request and return the decoded body of a successful response.
    pub async fn request(
        &self,
        path: &str,
        access: AccessLevel,
        method: Method,
        params: &Params,
        body: Option<&str>,
    ) -> Result<Value, CoinbaseError> {
        let signed = self.sign(path, access, method, params, body)?;
        self.execute(signed).await
    }

    /// Make a public GET request and return the `data` payload.
    pub(crate) async fn public_get(&self, path: &str, params: &Params) -> Result<Value, CoinbaseError> {
        let response = self
            .request(path, AccessLevel::Public, Method::GET, params, None)
            .await?;
        unwrap_envelope(&response).cloned()
    }

    /// Make an authenticated GET request and return the `data` payload.
    pub(crate) async fn private_get(&self, path: &str, params: &Params) -> Result<Value, CoinbaseError> {
        let response = self
            .request(path, AccessLevel::Private, Method::GET, params, None)
            .await?;
        unwrap_envelope(&response).cloned()
    }

    /// Hand a signed request to the transport and classify the response.
    async fn execute(&self, request: SignedRequest) -> Result<Value, CoinbaseError> {
        let SignedRequest {
            url,
            method,
            headers,
            body,
        } = request;

        let mut builder = self.http_client.request(method, url).headers(headers);
        if let Some(body) = body {
            builder = builder.body(body);
        }
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        match classify_response(status, &body) {
            ResponseOutcome::Success(value) => Ok(value),
            ResponseOutcome::Failed(error) => {
                tracing::warn!(status, kind = %error.kind, "Coinbase request failed");
                Err(CoinbaseError::Api(error))
            }
        }
    }
}

impl Default for CoinbaseRestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CoinbaseRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinbaseRestClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .finish()
    }
}

/// Builder for [`CoinbaseRestClient`].
pub struct CoinbaseRestClientBuilder {
    base_url: String,
    credentials: Credentials,
    timestamp_provider: Option<Arc<dyn TimestampProvider>>,
    currency_codes: CurrencyCodes,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    max_retries: u32,
}

impl CoinbaseRestClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: COINBASE_BASE_URL.to_string(),
            credentials: Credentials::default(),
            timestamp_provider: None,
            currency_codes: CurrencyCodes::default(),
            user_agent: None,
            timeout: None,
            max_retries: 0,
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the credentials for authenticated requests.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set a custom timestamp provider.
    pub fn timestamp_provider(mut self, provider: Arc<dyn TimestampProvider>) -> Self {
        self.timestamp_provider = Some(provider);
        self
    }

    /// Set the currency-code table.
    pub fn currency_codes(mut self, codes: CurrencyCodes) -> Self {
        self.currency_codes = codes;
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the transport timeout for a whole request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Let the transport retry transient failures up to `retries` times.
    ///
    /// Defaults to 0.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Build the client.
    pub fn build(self) -> CoinbaseRestClient {
        // Build default headers.
        let mut headers = HeaderMap::new();
        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("coinbase-api-client/{}", env!("CARGO_PKG_VERSION")));
        let header_value = HeaderValue::from_str(&user_agent)
            .unwrap_or_else(|_| HeaderValue::from_static("coinbase-api-client"));
        headers.insert(USER_AGENT, header_value);

        let mut reqwest_builder = reqwest::Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            reqwest_builder = reqwest_builder.timeout(timeout);
        }
        let reqwest_client = reqwest_builder
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        let mut middleware = ClientBuilder::new(reqwest_client).with(TracingMiddleware::default());
        if self.max_retries > 0 {
            let retry_policy =
                ExponentialBackoff::builder().build_with_max_retries(self.max_retries);
            middleware = middleware.with(RetryTransientMiddleware::new_with_policy(retry_policy));
        }

        let timestamp_provider = self
            .timestamp_provider
            .unwrap_or_else(|| Arc::new(SystemTimestamp::new()));

        CoinbaseRestClient {
            http_client: middleware.build(),
            base_url: self.base_url,
            credentials: Arc::new(self.credentials),
            timestamp_provider,
            currency_codes: Arc::new(self.currency_codes),
        }
    }
}

impl Default for CoinbaseRestClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
