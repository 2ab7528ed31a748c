//! Turns a raw transport result into a decoded value or a classified error.
//!
//! # Design
//! Classification is a pure function of its input and runs in a fixed order:
//! transport failure, then status code, then JSON parsing, then the envelope
//! arm. The status check comes first, so a non-2xx body is never parsed even
//! when it happens to hold a `Left`. Every operation of `WalletClient` goes
//! through `normalize`; nothing here retries or caches.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::envelope::{is_unit, unit_value, Envelope};
use crate::error::ClientError;
use crate::http::{HttpResponse, RawResponse};

/// Normalize a transport result and decode the `Right` payload as `T`.
///
/// Unit payloads (`null`, `[]`, `{}` or a missing `Right`) are handed to
/// `T`'s deserializer as they arrived, so `Unit` and empty collections both
/// decode from them.
pub fn normalize<T: DeserializeOwned>(raw: RawResponse) -> Result<T, ClientError> {
    let right = classify(raw)?;
    decode_value(right)
}

/// Normalize without a target type. Unit payloads become `{}`.
pub fn normalize_value(raw: RawResponse) -> Result<Value, ClientError> {
    let right = classify(raw)?;
    if is_unit(&right) {
        return Ok(unit_value());
    }
    Ok(right)
}

/// Decode a `Right` payload into the operation's type.
pub fn decode_value<T: DeserializeOwned>(right: Value) -> Result<T, ClientError> {
    serde_json::from_value(right).map_err(|e| {
        warn!(error = %e, "Right payload does not match the expected type");
        ClientError::Decode(format!("unexpected Right payload: {e}"))
    })
}

/// Run the classification steps and return the raw `Right` payload.
fn classify(raw: RawResponse) -> Result<Value, ClientError> {
    let response = raw.map_err(|e| {
        warn!(error = %e, "transport failed before a response was received");
        ClientError::Transport(e)
    })?;
    check_status(&response)?;

    let envelope = Envelope::from_body(&response.body).inspect_err(|e| {
        warn!(status = response.status, error = %e, "malformed response envelope");
    })?;
    match envelope {
        Envelope::Right(value) => {
            debug!(status = response.status, unit = is_unit(&value), "Right envelope");
            Ok(value)
        }
        Envelope::Left(message) => {
            warn!(status = response.status, %message, "backend returned Left");
            Err(ClientError::Server(message))
        }
    }
}

/// Map non-2xx status codes to `HttpStatus`, leaving the body unparsed.
fn check_status(response: &HttpResponse) -> Result<(), ClientError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "non-success HTTP status");
    Err(ClientError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;
    use crate::envelope::Unit;
    use crate::error::{ErrorKind, TransportError};

    fn respond(status: u16, body: &str) -> RawResponse {
        Ok(HttpResponse {
            status,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_string(),
        })
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
    }

    #[test]
    fn right_empty_array_is_empty_object() {
        let value = normalize_value(respond(200, r#"{"Right":[]}"#)).unwrap();
        assert_eq!(value, json!({}));

        let unit: Unit = normalize(respond(200, r#"{"Right":[]}"#)).unwrap();
        assert_eq!(unit, Unit {});
    }

    #[test]
    fn missing_or_null_right_is_empty_object() {
        for body in ["{}", r#"{"Right":null}"#, r#"{"Right":{}}"#] {
            assert_eq!(normalize_value(respond(200, body)).unwrap(), json!({}), "{body}");
            let _: Unit = normalize(respond(200, body)).unwrap();
        }
    }

    #[test]
    fn empty_right_still_decodes_as_empty_list() {
        let items: Vec<Named> = normalize(respond(200, r#"{"Right":[]}"#)).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn right_value_delivered_unchanged() {
        let value = normalize_value(respond(200, r#"{"Right":{"name":"main","n":[1,2]}}"#)).unwrap();
        assert_eq!(value, json!({"name": "main", "n": [1, 2]}));

        let named: Named = normalize(respond(201, r#"{"Right":{"name":"main"}}"#)).unwrap();
        assert_eq!(named.name, "main");
    }

    #[test]
    fn bad_request_without_body_is_http_status_error() {
        let err = normalize::<Unit>(respond(400, "")).unwrap_err();
        assert!(err.to_string().contains("HTTPStatusError"));
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn non_2xx_ignores_body() {
        for body in ["", "<html>oops</html>", r#"{"Right":[]}"#, r#"{"Left":"nope"}"#] {
            let err = normalize_value(respond(500, body)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::HttpStatus, "{body}");
        }
        let err = normalize_value(respond(302, "")).unwrap_err();
        assert_eq!(err.status(), Some(302));
    }

    #[test]
    fn left_is_server_error() {
        let err = normalize::<Unit>(respond(200, r#"{"Left":"Any error"}"#)).unwrap_err();
        assert!(err.to_string().contains("ServerError"));
        assert!(err.to_string().contains("Any error"));
        assert_eq!(err.kind(), ErrorKind::Server);
    }

    #[test]
    fn unparsable_success_body_is_decode_error() {
        for body in ["", "not json", "42", r#"{"Right":1,"Left":"x"}"#] {
            let err = normalize_value(respond(200, body)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Decode, "{body}");
        }
    }

    #[test]
    fn payload_type_mismatch_is_decode_error() {
        let err = normalize::<Named>(respond(200, r#"{"Right":{"id":1}}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);

        let err = normalize::<Unit>(respond(200, r#"{"Right":[1]}"#)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[test]
    fn transport_failure_is_propagated() {
        let raw: RawResponse = Err(TransportError::new("network unreachable"));
        let err = normalize_value(raw).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.to_string(), "TransportError: network unreachable");
    }

    #[test]
    fn classification_is_repeatable() {
        let cases = [
            (200, r#"{"Right":[]}"#),
            (400, ""),
            (200, r#"{"Left":"Any error"}"#),
            (200, "garbage"),
        ];
        for (status, body) in cases {
            let first = normalize_value(respond(status, body)).map_err(|e| e.kind());
            let second = normalize_value(respond(status, body)).map_err(|e| e.kind());
            assert_eq!(first, second, "{status} {body}");
        }
    }
}
