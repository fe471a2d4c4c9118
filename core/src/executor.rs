//! The single request executor shared by every client and service.
//!
//! # Design
//! `execute` is the whole request lifecycle: build the `HttpRequest`, send
//! it through the transport, then classify. Each call resolves to exactly one
//! `Outcome`. There is no retry and no timeout of its own. `dispatch` wraps
//! the same call for callers that want a completion callback instead of a
//! future.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};
use crate::outcome::{classify, Outcome};
use crate::transport::{Transport, UreqTransport};

/// Sends requests through a shared transport and classifies the results.
///
/// Cloning is cheap and shares the transport; the executor keeps no other
/// state, so identical calls against a deterministic transport produce
/// identical outcomes.
#[derive(Clone)]
pub struct Executor {
    transport: Arc<dyn Transport>,
}

impl Executor {
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
        }
    }

    #[instrument(skip_all, fields(%method, %url))]
    pub async fn execute(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Outcome {
        let request = HttpRequest::new(method, url, body);
        debug!(has_body = request.body.is_some(), "Sending request");

        match self.transport.send(request).await {
            Ok(response) => {
                debug!(status = response.status, "Response received");
                classify(response)
            }
            Err(e) => {
                warn!(error = %e, "Request failed before a response arrived");
                Err(RequestError::from(e))
            }
        }
    }

    /// Run `execute` on the current tokio runtime and hand the outcome to
    /// `on_complete`, which is called exactly once.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch<F>(
        &self,
        method: HttpMethod,
        url: impl Into<String>,
        body: Option<Value>,
        on_complete: F,
    ) -> JoinHandle<()>
    where
        F: FnOnce(Outcome) + Send + 'static,
    {
        let executor = self.clone();
        let url = url.into();
        tokio::spawn(async move {
            let outcome = executor.execute(method, &url, body.as_ref()).await;
            on_complete(outcome);
        })
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(UreqTransport::new())
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor").finish_non_exhaustive()
    }
}
