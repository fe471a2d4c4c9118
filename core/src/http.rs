//! HTTP request and response types as plain data.
//!
//! # Design
//! The executor builds an `HttpRequest` and hands it to a `Transport`, which
//! answers with an `HttpResponse`. Neither type knows about the network, so
//! request construction and response classification stay deterministic and
//! can be tested without a server.
//!
//! All fields use owned types (`String`, `Vec`) so values can move into a
//! blocking task or a spawned future without lifetime concerns.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Header attached to every request that carries a body.
pub const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `body` is the JSON text that goes on the wire. It is `None` when the
/// caller supplied no payload, and in that case no content-type header is
/// set either.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Describe a request to `url`, serializing `body` when one is given.
    ///
    /// A JSON `null` payload is treated the same as no payload.
    pub fn new(method: HttpMethod, url: impl Into<String>, body: Option<&Value>) -> Self {
        let body = body.filter(|value| !value.is_null()).map(Value::to_string);
        let headers = match body {
            Some(_) => vec![(JSON_CONTENT_TYPE.0.to_string(), JSON_CONTENT_TYPE.1.to_string())],
            None => Vec::new(),
        };
        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` after the round-trip completes, whatever the
/// status code. `body` is the raw response text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_without_body_has_no_headers() {
        let req = HttpRequest::new(HttpMethod::Get, "http://localhost/users", None);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.url, "http://localhost/users");
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn null_body_is_not_sent() {
        let req = HttpRequest::new(HttpMethod::Post, "http://localhost/users", Some(&Value::Null));
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn body_is_serialized_with_json_content_type() {
        let payload = json!({"name": "X"});
        let req = HttpRequest::new(HttpMethod::Post, "http://localhost/users", Some(&payload));
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        assert_eq!(req.body.as_deref(), Some(r#"{"name":"X"}"#));
    }

    #[test]
    fn scalar_and_array_bodies_are_sent() {
        let req = HttpRequest::new(HttpMethod::Put, "http://localhost/x", Some(&json!(false)));
        assert_eq!(req.body.as_deref(), Some("false"));

        let req = HttpRequest::new(HttpMethod::Put, "http://localhost/x", Some(&json!([1, "a"])));
        assert_eq!(req.body.as_deref(), Some(r#"[1,"a"]"#));
    }

    #[test]
    fn success_range_is_inclusive() {
        assert!(!HttpResponse::new(199, "", "").is_success());
        assert!(HttpResponse::new(200, "OK", "").is_success());
        assert!(HttpResponse::new(299, "", "").is_success());
        assert!(!HttpResponse::new(300, "Multiple Choices", "").is_success());
    }

    #[test]
    fn method_display_matches_wire_name() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        let parsed: HttpMethod = serde_json::from_str(r#""PUT""#).unwrap();
        assert_eq!(parsed, HttpMethod::Put);
    }
}
