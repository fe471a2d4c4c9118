//! The I/O seam between the executor and the network.
//!
//! # Design
//! `Transport` is the only place bytes move. The executor hands it an
//! `HttpRequest` and gets back an `HttpResponse` for any status code, or a
//! `TransportError` when no response arrived. Swapping the transport is how
//! tests run without a network (see `mock::MockTransport`).
//!
//! `UreqTransport` drives a blocking `ureq` agent on tokio's blocking pool,
//! so awaiting a request never stalls the async caller.

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one request and reports the response as data.
///
/// Implementations must return non-2xx responses as `Ok`; `Err` is reserved
/// for requests that got no response at all.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Production transport backed by `ureq`.
///
/// A fresh agent is built per request; nothing is pooled or retained between
/// calls. Timeouts are whatever `ureq` defaults to. Response bodies are
/// read in full with no size limit.
///
/// `HttpResponse::status_text` is the canonical reason phrase for the status
/// code (`404` gives `Not Found`), not the phrase the server sent, because
/// ureq does not expose the latter. It is empty for unregistered codes.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqTransport;

impl UreqTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        tokio::task::spawn_blocking(move || send_blocking(request))
            .await
            .map_err(|e| TransportError::new(format!("request task failed: {e}")))?
    }
}

/// Perform the round-trip on the current thread.
///
/// Disables ureq's status-code-as-error behavior so 4xx/5xx responses come
/// back as data and only transport failures surface as `Err`.
fn send_blocking(request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let url = request.url.as_str();
    let headers = request.headers.as_slice();
    let result = match (request.method, request.body) {
        (HttpMethod::Get, _) => with_headers(agent.get(url), headers).call(),
        (HttpMethod::Delete, _) => with_headers(agent.delete(url), headers).call(),
        (HttpMethod::Post, Some(body)) => with_headers(agent.post(url), headers).send(body.as_bytes()),
        (HttpMethod::Post, None) => with_headers(agent.post(url), headers).send_empty(),
        (HttpMethod::Put, Some(body)) => with_headers(agent.put(url), headers).send(body.as_bytes()),
        (HttpMethod::Put, None) => with_headers(agent.put(url), headers).send_empty(),
    };
    let mut response = result.map_err(|e| TransportError::new(e.to_string()))?;

    let status = response.status();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    // No size cap: a complete response is always delivered, however large.
    let body = response
        .body_mut()
        .with_config()
        .limit(u64::MAX)
        .read_to_string()
        .map_err(|e| TransportError::new(e.to_string()))?;

    Ok(HttpResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        headers,
        body,
    })
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
