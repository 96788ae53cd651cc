//! Response classification and envelope handling.
//!
//! Every exchange ends up either as a success payload or as exactly one
//! classified [`ApiError`]. Successful payloads are wrapped as
//! `{ "data": ... }`; [`unwrap_envelope`] enforces that.

use serde_json::Value;

use crate::error::{ApiError, CoinbaseError, status_codes};

/// Result of inspecting one HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// The decoded body of a successful response. `Null` for 204.
    Success(Value),
    /// The classified failure.
    Failed(ApiError),
}

impl ResponseOutcome {
    /// Turn the outcome into a result, raising the classified error.
    pub fn into_result(self) -> Result<Value, CoinbaseError> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failed(error) => Err(CoinbaseError::Api(error)),
        }
    }
}

/// Classify a response by status and raw body.
///
/// A response succeeds when its status is below 300 and the body decodes to
/// something other than `null`. 204 never has a body and always succeeds.
pub fn classify_response(status: u16, body: &str) -> ResponseOutcome {
    if status == status_codes::NO_CONTENT {
        return ResponseOutcome::Success(Value::Null);
    }

    let trimmed = body.trim();
    let parsed: Option<Value> = if trimmed.is_empty() {
        None
    } else {
        serde_json::from_str(trimmed).ok()
    };

    match parsed {
        Some(response) if status < 300 && !response.is_null() => ResponseOutcome::Success(response),
        parsed => {
            let message = error_message(parsed.as_ref(), body, status);
            ResponseOutcome::Failed(ApiError::new(status, message))
        }
    }
}

/// Extract a human-readable message from a failed response. Never empty.
///
/// Prefers `errors.message` (or the first entry's message when `errors` is a
/// list), then the serialized `errors` value, then the serialized body. Bodies
/// that are not JSON are used verbatim.
pub fn error_message(response: Option<&Value>, raw: &str, status: u16) -> String {
    let message = match response {
        None | Some(Value::Null) => raw.trim().to_string(),
        Some(response) => match response.get("errors") {
            Some(errors) => errors_message(errors),
            None => response.to_string(),
        },
    };

    if message.is_empty() {
        format!("HTTP {status} with an empty response body")
    } else {
        message
    }
}

fn errors_message(errors: &Value) -> String {
    errors
        .get("message")
        .or_else(|| errors.get(0).and_then(|first| first.get("message")))
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| errors.to_string())
}

/// Return the `data` field of a successful response.
///
/// A missing or falsy `data` (`null`, `false`, `0`, `""`, `[]`, `{}`) breaks
/// the envelope contract and is reported with the whole body.
pub fn unwrap_envelope(response: &Value) -> Result<&Value, CoinbaseError> {
    match response.get("data") {
        Some(data) if is_truthy(data) => Ok(data),
        _ => Err(CoinbaseError::MalformedResponse(format!(
            "failed due to a malformed response {response}"
        ))),
    }
}

/// Whether a JSON value counts as present.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_every_documented_status_has_one_outcome() {
        let body = r#"{"errors":[{"id":"x","message":"boom"}]}"#;
        let cases = [
            (200, None),
            (201, None),
            (400, Some(ErrorKind::GenericExchange)),
            (401, Some(ErrorKind::Authentication)),
            (402, Some(ErrorKind::Authentication)),
            (403, Some(ErrorKind::Authentication)),
            (404, Some(ErrorKind::GenericExchange)),
            (429, Some(ErrorKind::RateLimit)),
            (500, Some(ErrorKind::ServiceUnavailable)),
            (503, Some(ErrorKind::ServiceUnavailable)),
            (418, Some(ErrorKind::GenericExchange)),
        ];

        for (status, expected) in cases {
            match (classify_response(status, body), expected) {
                (ResponseOutcome::Success(_), None) => {}
                (ResponseOutcome::Failed(error), Some(kind)) => {
                    assert_eq!(error.kind, kind, "status {status}");
                    assert_eq!(error.status, status);
                    assert_eq!(error.message, "boom");
                }
                (outcome, expected) => panic!("status {status}: {outcome:?} vs {expected:?}"),
            }
        }
    }

    #[test]
    fn test_no_content_is_success() {
        assert_eq!(classify_response(204, ""), ResponseOutcome::Success(Value::Null));
    }

    #[test]
    fn test_empty_success_body_fails() {
        for body in ["", "   ", "null"] {
            match classify_response(200, body) {
                ResponseOutcome::Failed(error) => {
                    assert_eq!(error.kind, ErrorKind::GenericExchange);
                    assert!(!error.message.is_empty());
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn test_message_fallbacks() {
        let object = json!({"errors": {"message": "bad key"}});
        assert_eq!(error_message(Some(&object), "", 401), "bad key");

        let no_message = json!({"errors": {"id": "invalid_scope"}});
        assert_eq!(
            error_message(Some(&no_message), "", 403),
            r#"{"id":"invalid_scope"}"#
        );

        let no_errors = json!({"warning": "odd"});
        assert_eq!(error_message(Some(&no_errors), "", 400), r#"{"warning":"odd"}"#);

        assert_eq!(error_message(None, "<html>down</html>", 503), "<html>down</html>");
        assert_eq!(
            error_message(None, "", 500),
            "HTTP 500 with an empty response body"
        );
    }

    #[test]
    fn test_unwrap_envelope() {
        let response = json!({"data": [{"id": "BTC"}]});
        assert_eq!(unwrap_envelope(&response).unwrap(), &json!([{"id": "BTC"}]));
    }

    #[test]
    fn test_unwrap_envelope_rejects_missing_or_empty_data() {
        for response in [
            json!({"errors": []}),
            json!({"data": null}),
            json!({"data": []}),
            json!({"data": {}}),
            json!([]),
        ] {
            let err = unwrap_envelope(&response).unwrap_err();
            assert_eq!(err.kind(), Some(ErrorKind::GenericExchange));
            match err {
                CoinbaseError::MalformedResponse(message) => {
                    assert!(message.contains(&response.to_string()));
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }
}
