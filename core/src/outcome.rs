//! Response classification.
//!
//! Turns an `HttpResponse` into an `Outcome` without any I/O. Parsing is
//! lenient: an empty body is `null`, a body that is not JSON is returned as
//! a JSON string holding the raw text.

use serde_json::Value;

use crate::error::RequestError;
use crate::http::HttpResponse;

/// Result of one request: the parsed payload or the reason it failed.
pub type Outcome = Result<Value, RequestError>;

/// Decode a response body, falling back to the raw text.
pub fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Map a completed response to `Ok` for 2xx and `Err(Http)` otherwise.
pub fn classify(response: HttpResponse) -> Outcome {
    let body = parse_body(&response.body);
    if response.is_success() {
        Ok(body)
    } else {
        Err(RequestError::Http {
            status: response.status,
            status_text: response.status_text,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_null() {
        assert_eq!(parse_body(""), Value::Null);
    }

    #[test]
    fn json_body_is_parsed() {
        assert_eq!(parse_body(r#"{"id":1}"#), json!({"id": 1}));
        assert_eq!(parse_body("[1,2]"), json!([1, 2]));
        assert_eq!(parse_body("42"), json!(42));
    }

    #[test]
    fn non_json_body_is_kept_as_text() {
        assert_eq!(parse_body("Not Found"), json!("Not Found"));
        assert_eq!(parse_body("{broken"), json!("{broken"));
    }

    #[test]
    fn whitespace_only_body_is_kept_as_text() {
        assert_eq!(parse_body("  "), json!("  "));
    }

    #[test]
    fn success_status_yields_payload() {
        let outcome = classify(HttpResponse::new(201, "Created", r#"{"id":11,"name":"X"}"#));
        assert_eq!(outcome, Ok(json!({"id": 11, "name": "X"})));
    }

    #[test]
    fn success_with_text_body_yields_text() {
        let outcome = classify(HttpResponse::new(200, "OK", "plain"));
        assert_eq!(outcome, Ok(json!("plain")));
    }

    #[test]
    fn non_success_status_yields_http_error() {
        let outcome = classify(HttpResponse::new(404, "Not Found", "Not Found"));
        assert_eq!(
            outcome,
            Err(RequestError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
                body: json!("Not Found"),
            })
        );
    }

    #[test]
    fn redirect_and_server_errors_are_failures() {
        for status in [199, 300, 304, 500, 503] {
            let err = classify(HttpResponse::new(status, "", r#"{"error":true}"#)).unwrap_err();
            assert_eq!(err.status(), Some(status));
            assert_eq!(err.body(), Some(&json!({"error": true})));
        }
    }
}
