//! Scripted transport for tests.
//!
//! Use [`MockTransport::respond`] or [`MockTransport::fail`] to route a
//! `(method, url)` pair, hand a clone to an `Executor`, then inspect what
//! was sent with [`MockTransport::requests`].
//!
//! ```ignore
//! let mock = MockTransport::new();
//! mock.respond(HttpMethod::Get, "http://api/users/1", HttpResponse::new(200, "OK", "{}"));
//! let executor = Executor::new(mock.clone());
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

type Route = (HttpMethod, String);

#[derive(Default)]
struct State {
    routes: HashMap<Route, Result<HttpResponse, TransportError>>,
    sent: Vec<HttpRequest>,
}

/// Deterministic in-memory `Transport`.
///
/// Unrouted requests are answered with `404 Not Found` and a plain-text
/// body. Clones share routes and the request log.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<State>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `method url` with `response`, replacing any earlier route.
    pub fn respond(&self, method: HttpMethod, url: impl Into<String>, response: HttpResponse) {
        self.lock().routes.insert((method, url.into()), Ok(response));
    }

    /// Make `method url` fail before any response arrives.
    pub fn fail(&self, method: HttpMethod, url: impl Into<String>, error: TransportError) {
        self.lock().routes.insert((method, url.into()), Err(error));
    }

    /// Every request sent so far, in send order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.lock().sent.clone()
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panic while holding the lock only happens inside a failing test.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut state = self.lock();
        let key = (request.method, request.url.clone());
        state.sent.push(request);
        state
            .routes
            .get(&key)
            .cloned()
            .unwrap_or_else(|| Ok(HttpResponse::new(404, "Not Found", "Not Found")))
    }
}
