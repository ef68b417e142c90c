//! reqwest-backed fetcher for native targets

use async_trait::async_trait;
use serde_json::Value;

use super::error::FetchError;
use super::fetch::Fetcher;

/// Fetches collections over HTTP with a shared reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client (proxies, TLS roots, ...)
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "Collection response");

        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Malformed(e.to_string())
            } else {
                FetchError::Transport(e.to_string())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{ListController, ViewState};
    use crate::model::{User, Workout};
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn spawn_server(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_bare_array_response() {
        let router = Router::new().route(
            "/api/users/",
            get(|| async {
                Json(json!([{
                    "id": 1,
                    "username": "alice",
                    "email": "a@x.com",
                    "team_name": "Red",
                    "fitness_level": "Advanced"
                }]))
            }),
        );
        let base = spawn_server(router).await;

        let mut controller =
            ListController::<User, _>::new(format!("{}/api/users/", base), HttpFetcher::new());
        let state = controller.activate().await;

        let users = state.items().expect("ready");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "alice");
    }

    #[tokio::test]
    async fn test_paginated_response() {
        let router = Router::new().route(
            "/api/workouts/",
            get(|| async {
                Json(json!({
                    "count": 1,
                    "next": null,
                    "previous": null,
                    "results": [{"id": 1, "name": "Core Blast", "workout_type": "HIIT"}]
                }))
            }),
        );
        let base = spawn_server(router).await;

        let mut controller = ListController::<Workout, _>::new(
            format!("{}/api/workouts/", base),
            HttpFetcher::new(),
        );

        match controller.activate().await {
            ViewState::Ready(items) => assert_eq!(items[0].name, "Core Blast"),
            other => panic!("expected ready, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_server_error_status() {
        let router = Router::new().route(
            "/api/users/",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = spawn_server(router).await;

        let result = HttpFetcher::new()
            .get_json(&format!("{}/api/users/", base))
            .await;
        assert_eq!(result, Err(FetchError::Http { status: 500 }));
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let router = Router::new().route("/api/teams/", get(|| async { "<html>teams</html>" }));
        let base = spawn_server(router).await;

        let result = HttpFetcher::new()
            .get_json(&format!("{}/api/teams/", base))
            .await;
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = HttpFetcher::new()
            .get_json(&format!("http://{}/api/users/", addr))
            .await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}
