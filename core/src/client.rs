//! Generic client bound to one base URL.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and an `Executor`. Every method
//! appends an endpoint path to the base URL and delegates to the executor;
//! nothing is validated or transformed on the way in or out.

use serde_json::Value;

use crate::executor::Executor;
use crate::http::HttpMethod;
use crate::outcome::Outcome;

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    executor: Executor,
}

impl ApiClient {
    pub fn new(base_url: &str, executor: Executor) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            executor,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `endpoint`, which is expected to start with `/`.
    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    pub async fn request(&self, method: HttpMethod, endpoint: &str, body: Option<&Value>) -> Outcome {
        self.executor.execute(method, &self.url(endpoint), body).await
    }

    pub async fn get(&self, endpoint: &str) -> Outcome {
        self.request(HttpMethod::Get, endpoint, None).await
    }

    pub async fn post(&self, endpoint: &str, body: &Value) -> Outcome {
        self.request(HttpMethod::Post, endpoint, Some(body)).await
    }

    pub async fn put(&self, endpoint: &str, body: &Value) -> Outcome {
        self.request(HttpMethod::Put, endpoint, Some(body)).await
    }

    pub async fn delete(&self, endpoint: &str) -> Outcome {
        self.request(HttpMethod::Delete, endpoint, None).await
    }
}
