//! Coinbase v2 REST API client.
//!
//! A call runs through the same pipeline every time: credentials are
//! resolved, the request is signed (or tagged with a bearer token), the
//! transport sends it, the response is classified, and the `data` envelope
//! is unwrapped and normalized.
//!
//! # Trait-based API
//!
//! The [`CoinbaseClient`] trait abstracts the REST operations, enabling mock
//! implementations for testing and decorators around the real client.

mod client;
mod endpoints;
pub mod private;
pub mod public;
pub mod request;
pub mod response;
mod traits;

pub use client::{CoinbaseRestClient, CoinbaseRestClientBuilder};
pub use endpoints::*;
pub use request::{Params, RequestSigner, SignedRequest};
pub use response::{ResponseOutcome, classify_response, unwrap_envelope};
pub use traits::CoinbaseClient;
