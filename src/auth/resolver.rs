//! Decide which authentication mode applies to a request.

use crate::auth::Credentials;
use crate::error::CoinbaseError;

/// Whether an endpoint needs credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLevel {
    /// Unauthenticated endpoint.
    Public,
    /// Endpoint that must carry credentials.
    Private,
}

/// Credential fields a mode can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialField {
    /// The API key.
    ApiKey,
    /// The API secret.
    Secret,
    /// The OAuth bearer token.
    BearerToken,
}

impl CredentialField {
    /// Name of the field as reported in errors.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ApiKey => "apiKey",
            Self::Secret => "secret",
            Self::BearerToken => "bearer",
        }
    }
}

/// How a request is authenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode<'a> {
    /// Bearer token header, no signature.
    OAuth {
        /// The bearer token.
        token: &'a str,
    },
    /// HMAC-SHA256 signed with the API secret.
    Signed {
        /// The API key.
        api_key: &'a str,
        /// The API secret.
        secret: &'a str,
    },
    /// No authentication headers.
    Anonymous,
}

impl AuthMode<'_> {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OAuth { .. } => "oauth",
            Self::Signed { .. } => "hmac",
            Self::Anonymous => "anonymous",
        }
    }
}

/// The fields that must be present for `access` under `credentials`.
///
/// OAuth needs only the bearer token, signed private access needs both the
/// key and the secret, public access needs nothing.
pub fn required_fields(credentials: &Credentials, access: AccessLevel) -> &'static [CredentialField] {
    match access {
        AccessLevel::Public => &[],
        AccessLevel::Private if credentials.uses_oauth() => &[CredentialField::BearerToken],
        AccessLevel::Private => &[CredentialField::ApiKey, CredentialField::Secret],
    }
}

/// Check that every field required for `access` is present and non-empty.
pub fn check_required_credentials(
    credentials: &Credentials,
    access: AccessLevel,
) -> Result<(), CoinbaseError> {
    for field in required_fields(credentials, access) {
        let present = match field {
            CredentialField::ApiKey => credentials.api_key().is_some(),
            CredentialField::Secret => credentials.expose_secret().is_some(),
            CredentialField::BearerToken => credentials.expose_bearer_token().is_some(),
        };
        if !present {
            return Err(CoinbaseError::MissingCredential(field.as_str()));
        }
    }
    Ok(())
}

/// Resolve the authentication mode for a request.
///
/// A bearer token selects OAuth at every access level. Otherwise private
/// requests are signed and public ones go out anonymously. Missing private
/// credentials fail here, before anything touches the network.
pub fn resolve_auth(
    credentials: &Credentials,
    access: AccessLevel,
) -> Result<AuthMode<'_>, CoinbaseError> {
    check_required_credentials(credentials, access)?;

    if let Some(token) = credentials.expose_bearer_token() {
        return Ok(AuthMode::OAuth { token });
    }

    match (access, credentials.api_key(), credentials.expose_secret()) {
        (AccessLevel::Private, Some(api_key), Some(secret)) => {
            Ok(AuthMode::Signed { api_key, secret })
        }
        (AccessLevel::Private, None, _) => Err(CoinbaseError::MissingCredential("apiKey")),
        (AccessLevel::Private, _, None) => Err(CoinbaseError::MissingCredential("secret")),
        (AccessLevel::Public, _, _) => Ok(AuthMode::Anonymous),
    }
}
