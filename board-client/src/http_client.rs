use crate::error::BoardClientError;
use crate::models::{
    CreatePostRequest, ErrorResponse, HealthResponse, MessageResponse, Post, UpdatePostRequest,
};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct BoardClient {
    client: Client,
    base_url: String,
}

impl BoardClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BoardClientError> {
        let url = self.url("/api/posts");
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    pub async fn get_post(&self, id: &str) -> Result<Post, BoardClientError> {
        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    pub async fn create_post(
        &self,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
    ) -> Result<Post, BoardClientError> {
        let url = self.url("/api/posts");
        let request = CreatePostRequest {
            title: title.into(),
            content: content.into(),
            author: author.into(),
        };

        tracing::debug!("POST {}", url);
        let response = self.client.post(&url).json(&request).send().await?;
        Self::handle_response(response).await
    }

    pub async fn update_post(
        &self,
        id: &str,
        request: &UpdatePostRequest,
    ) -> Result<Post, BoardClientError> {
        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!("PUT {}", url);
        let response = self.client.put(&url).json(request).send().await?;
        Self::handle_response(response).await
    }

    pub async fn delete_post(&self, id: &str) -> Result<String, BoardClientError> {
        let url = self.url(&format!("/api/posts/{}", id));
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        let confirmation: MessageResponse = Self::handle_response(response).await?;
        Ok(confirmation.message)
    }

    pub async fn health(&self) -> Result<HealthResponse, BoardClientError> {
        let url = self.url("/api/health");
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, BoardClientError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        let error_text = response.text().await?;
        let message = serde_json::from_str::<ErrorResponse>(&error_text)
            .map(|e| e.error)
            .unwrap_or(error_text);

        Err(match status {
            StatusCode::NOT_FOUND => BoardClientError::NotFound,
            StatusCode::BAD_REQUEST => BoardClientError::InvalidRequest(message),
            s if s.is_server_error() => BoardClientError::ServerError(message),
            _ => BoardClientError::TransportError(format!("HTTP {}: {}", status, message)),
        })
    }
}
