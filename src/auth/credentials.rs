//! Credential management for Coinbase API authentication.

use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "COINBASE_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "COINBASE_API_SECRET";
/// Environment variable holding an OAuth bearer token.
pub const BEARER_TOKEN_VAR: &str = "COINBASE_BEARER_TOKEN";

/// API credentials: an API key/secret pair, an OAuth bearer token, or neither.
///
/// A non-empty bearer token always wins over the key/secret pair, even when
/// both are configured. With nothing set only public endpoints are reachable.
#[derive(Clone, Default)]
pub struct Credentials {
    api_key: Option<String>,
    api_secret: Option<SecretString>,
    bearer_token: Option<SecretString>,
}

impl Credentials {
    /// Create credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            api_secret: Some(SecretString::from(api_secret.into())),
            bearer_token: None,
        }
    }

    /// Create OAuth credentials from a pre-issued bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            api_key: None,
            api_secret: None,
            bearer_token: Some(SecretString::from(token.into())),
        }
    }

    /// Create credentials from optional parts.
    pub fn from_parts(
        api_key: Option<String>,
        api_secret: Option<String>,
        bearer_token: Option<String>,
    ) -> Self {
        Self {
            api_key,
            api_secret: api_secret.map(SecretString::from),
            bearer_token: bearer_token.map(SecretString::from),
        }
    }

    /// Read credentials from `COINBASE_API_KEY`, `COINBASE_API_SECRET` and
    /// `COINBASE_BEARER_TOKEN`.
    ///
    /// Returns `None` if none of the variables are set.
    pub fn from_env() -> Option<Self> {
        Self::from_env_vars(API_KEY_VAR, API_SECRET_VAR, BEARER_TOKEN_VAR)
    }

    /// Read credentials from custom environment variable names.
    ///
    /// Returns `None` if none of the variables are set.
    pub fn from_env_vars(key_var: &str, secret_var: &str, bearer_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok();
        let api_secret = std::env::var(secret_var).ok();
        let bearer_token = std::env::var(bearer_var).ok();

        if api_key.is_none() && api_secret.is_none() && bearer_token.is_none() {
            return None;
        }
        Some(Self::from_parts(api_key, api_secret, bearer_token))
    }

    /// The API key, if set and non-empty.
    pub fn api_key(&self) -> Option<&str> {
        non_empty(self.api_key.as_deref())
    }

    /// Get the API secret for signing, if set and non-empty.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> Option<&str> {
        non_empty(self.api_secret.as_ref().map(|s| s.expose_secret()))
    }

    /// Get the OAuth bearer token, if set and non-empty.
    ///
    /// This method exposes the token - use carefully.
    pub fn expose_bearer_token(&self) -> Option<&str> {
        non_empty(self.bearer_token.as_ref().map(|s| s.expose_secret()))
    }

    /// Whether requests made with these credentials use OAuth.
    pub fn uses_oauth(&self) -> bool {
        self.expose_bearer_token().is_some()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |set: bool| if set { "[REDACTED]" } else { "None" };
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &redacted(self.api_secret.is_some()))
            .field("bearer_token", &redacted(self.bearer_token.is_some()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));

        let oauth = Credentials::bearer("token_value");
        assert!(!format!("{:?}", oauth).contains("token_value"));
    }

    #[test]
    fn test_empty_values_count_as_absent() {
        let creds = Credentials::from_parts(Some(String::new()), Some(String::new()), Some(String::new()));
        assert!(creds.api_key().is_none());
        assert!(creds.expose_secret().is_none());
        assert!(!creds.uses_oauth());
    }

    #[test]
    fn test_bearer_token_enables_oauth() {
        let creds = Credentials::from_parts(
            Some("key".to_string()),
            Some("secret".to_string()),
            Some("token".to_string()),
        );
        assert!(creds.uses_oauth());
        assert_eq!(creds.expose_bearer_token(), Some("token"));
        assert_eq!(creds.api_key(), Some("key"));
    }

    #[test]
    fn test_from_env_vars_missing() {
        assert!(
            Credentials::from_env_vars(
                "COINBASE_TEST_UNSET_KEY",
                "COINBASE_TEST_UNSET_SECRET",
                "COINBASE_TEST_UNSET_BEARER",
            )
            .is_none()
        );
    }
}
