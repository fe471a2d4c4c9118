//! Endpoints of the user/post API.

use serde_json::Value;

use crate::client::ApiClient;
use crate::executor::Executor;
use crate::outcome::Outcome;

/// Base URL of the public user/post API.
pub const DEFAULT_USERS_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Users and their posts.
#[derive(Debug, Clone)]
pub struct UserService {
    client: ApiClient,
}

impl UserService {
    pub fn new(base_url: &str, executor: Executor) -> Self {
        Self {
            client: ApiClient::new(base_url, executor),
        }
    }

    pub fn with_default_base_url(executor: Executor) -> Self {
        Self::new(DEFAULT_USERS_BASE_URL, executor)
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub async fn get_all_users(&self) -> Outcome {
        self.client.get("/users").await
    }

    pub async fn get_user_by_id(&self, id: u64) -> Outcome {
        self.client.get(&format!("/users/{id}")).await
    }

    pub async fn create_user(&self, user: &Value) -> Outcome {
        self.client.post("/users", user).await
    }

    pub async fn update_user(&self, id: u64, user: &Value) -> Outcome {
        self.client.put(&format!("/users/{id}"), user).await
    }

    pub async fn delete_user(&self, id: u64) -> Outcome {
        self.client.delete(&format!("/users/{id}")).await
    }

    pub async fn get_user_posts(&self, user_id: u64) -> Outcome {
        self.client.get(&format!("/users/{user_id}/posts")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpMethod, HttpResponse};
    use crate::mock::MockTransport;
    use serde_json::json;

    const BASE: &str = "http://users.test";

    fn service(mock: &MockTransport) -> UserService {
        UserService::new(BASE, Executor::new(mock.clone()))
    }

    #[test]
    fn default_base_url_points_at_public_api() {
        let service = UserService::with_default_base_url(Executor::new(MockTransport::new()));
        assert_eq!(service.client().base_url(), "https://jsonplaceholder.typicode.com");
    }

    #[tokio::test]
    async fn get_user_by_id_returns_user() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            format!("{BASE}/users/1"),
            HttpResponse::new(200, "OK", r#"{"id":1,"name":"Leanne Graham","email":"a@b.com"}"#),
        );

        let user = service(&mock).get_user_by_id(1).await.unwrap();
        assert_eq!(user, json!({"id": 1, "name": "Leanne Graham", "email": "a@b.com"}));
    }

    #[tokio::test]
    async fn create_user_posts_payload() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Post,
            format!("{BASE}/users"),
            HttpResponse::new(201, "Created", r#"{"id":11,"name":"X"}"#),
        );

        let created = service(&mock).create_user(&json!({"name": "X"})).await.unwrap();
        assert_eq!(created, json!({"id": 11, "name": "X"}));
        assert_eq!(mock.requests()[0].body.as_deref(), Some(r#"{"name":"X"}"#));
    }

    #[tokio::test]
    async fn operations_use_expected_paths() {
        let mock = MockTransport::new();
        let s = service(&mock);
        let data = json!({"name": "Y"});

        let _ = s.get_all_users().await;
        let _ = s.update_user(3, &data).await;
        let _ = s.delete_user(4).await;
        let _ = s.get_user_posts(5).await;

        let sent: Vec<(HttpMethod, String)> =
            mock.requests().into_iter().map(|r| (r.method, r.url)).collect();
        assert_eq!(
            sent,
            vec![
                (HttpMethod::Get, format!("{BASE}/users")),
                (HttpMethod::Put, format!("{BASE}/users/3")),
                (HttpMethod::Delete, format!("{BASE}/users/4")),
                (HttpMethod::Get, format!("{BASE}/users/5/posts")),
            ]
        );
    }
}
