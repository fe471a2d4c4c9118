//! Endpoints of the product/catalog API.

use serde_json::Value;

use crate::client::ApiClient;
use crate::executor::Executor;
use crate::outcome::Outcome;

/// Base URL of the public product/catalog API.
pub const DEFAULT_PRODUCTS_BASE_URL: &str = "https://fakestoreapi.com";

/// Products and their categories.
#[derive(Debug, Clone)]
pub struct ProductService {
    client: ApiClient,
}

impl ProductService {
    pub fn new(base_url: &str, executor: Executor) -> Self {
        Self {
            client: ApiClient::new(base_url, executor),
        }
    }

    pub fn with_default_base_url(executor: Executor) -> Self {
        Self::new(DEFAULT_PRODUCTS_BASE_URL, executor)
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn get_all_products(&self) -> Outcome {
        self.client.get("/products").await
    }

    pub async fn get_product_by_id(&self, id: u64) -> Outcome {
        self.client.get(&format!("/products/{id}")).await
    }

    pub async fn get_categories(&self) -> Outcome {
        self.client.get("/products/categories").await
    }

    /// Products in `category`. The name is percent-encoded as a single path
    /// segment, so `men's clothing` is sent as `men%27s%20clothing`.
    pub async fn get_products_by_category(&self, category: &str) -> Outcome {
        let segment = urlencoding::encode(category);
        self.client.get(&format!("/products/category/{segment}")).await
    }

    pub async fn create_product(&self, product: &Value) -> Outcome {
        self.client.post("/products", product).await
    }

    pub async fn update_product(&self, id: u64, product: &Value) -> Outcome {
        self.client.put(&format!("/products/{id}"), product).await
    }

    pub async fn delete_product(&self, id: u64) -> Outcome {
        self.client.delete(&format!("/products/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RequestError;
    use crate::http::{HttpMethod, HttpResponse};
    use crate::mock::MockTransport;
    use serde_json::json;

    const BASE: &str = "http://products.test";

    fn service(mock: &MockTransport) -> ProductService {
        ProductService::new(BASE, Executor::new(mock.clone()))
    }

    #[test]
    fn default_base_url_points_at_public_api() {
        let service = ProductService::with_default_base_url(Executor::new(MockTransport::new()));
        assert_eq!(service.client().base_url(), "https://fakestoreapi.com");
    }

    #[tokio::test]
    async fn delete_missing_product_reports_text_body() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Delete,
            format!("{BASE}/products/1"),
            HttpResponse::new(404, "Not Found", "Not Found"),
        );

        let err = service(&mock).delete_product(1).await.unwrap_err();
        assert_eq!(
            err,
            RequestError::Http {
                status: 404,
                status_text: "Not Found".to_string(),
                body: json!("Not Found"),
            }
        );
    }

    #[tokio::test]
    async fn category_name_is_encoded_as_one_segment() {
        let mock = MockTransport::new();
        let _ = service(&mock).get_products_by_category("men's clothing").await;
        let _ = service(&mock).get_products_by_category("electronics").await;

        let urls: Vec<String> = mock.requests().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{BASE}/products/category/men%27s%20clothing"),
                format!("{BASE}/products/category/electronics"),
            ]
        );
    }

    #[tokio::test]
    async fn operations_use_expected_paths() {
        let mock = MockTransport::new();
        let s = service(&mock);
        let data = json!({"title": "T", "price": 1.5});

        let _ = s.get_all_products().await;
        let _ = s.get_product_by_id(2).await;
        let _ = s.get_categories().await;
        let _ = s.create_product(&data).await;
        let _ = s.update_product(7, &data).await;
        let _ = s.delete_product(8).await;

        let sent: Vec<(HttpMethod, String, bool)> = mock
            .requests()
            .into_iter()
            .map(|r| (r.method, r.url, r.body.is_some()))
            .collect();
        assert_eq!(
            sent,
            vec![
                (HttpMethod::Get, format!("{BASE}/products"), false),
                (HttpMethod::Get, format!("{BASE}/products/2"), false),
                (HttpMethod::Get, format!("{BASE}/products/categories"), false),
                (HttpMethod::Post, format!("{BASE}/products"), true),
                (HttpMethod::Put, format!("{BASE}/products/7"), true),
                (HttpMethod::Delete, format!("{BASE}/products/8"), false),
            ]
        );
    }
}
