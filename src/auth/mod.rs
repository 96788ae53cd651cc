//! Authentication module for Coinbase API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Resolution between API-key signing and OAuth bearer tokens
//! - Timestamp generation for signed requests
//! - HMAC-SHA256 signature generation for authenticated requests

mod credentials;
mod resolver;
mod signature;
mod timestamp;

pub use credentials::{API_KEY_VAR, API_SECRET_VAR, BEARER_TOKEN_VAR, Credentials};
pub use resolver::{
    AccessLevel, AuthMode, CredentialField, check_required_credentials, required_fields,
    resolve_auth,
};
pub use signature::{canonical_message, sign_request};
pub use timestamp::{FixedTimestamp, SystemTimestamp, TimestampProvider};
