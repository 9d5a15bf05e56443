use crate::models::*;
use gloo_net::http::Request;
use serde::{de::DeserializeOwned, Serialize};

const API_BASE: &str = match option_env!("BOARD_API_BASE") {
    Some(base) => base,
    None => "http://localhost:3000",
};

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, String> {
        let url = format!("{}{}", self.base_url, path);

        let request_builder = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            "DELETE" => Request::delete(&url),
            _ => return Err(format!("Unsupported method: {}", method)),
        };

        let response = match body {
            Some(body) => request_builder
                .json(body)
                .map_err(|e| format!("Failed to serialize request: {}", e))?
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?,
            None => request_builder
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?,
        };

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if (200..300).contains(&status) {
            serde_json::from_str(&text).map_err(|e| format!("Failed to parse response: {}", e))
        } else {
            match serde_json::from_str::<ErrorResponse>(&text) {
                Ok(err) => Err(err.error),
                Err(_) => Err(format!("HTTP {}: {}", status, text)),
            }
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, String> {
        self.request("GET", "/api/posts", None::<&()>).await
    }

    pub async fn create_post(&self, data: &PostFormData) -> Result<Post, String> {
        self.request("POST", "/api/posts", Some(data)).await
    }

    pub async fn update_post(&self, id: &str, data: &PostFormData) -> Result<Post, String> {
        self.request("PUT", &format!("/api/posts/{}", id), Some(data))
            .await
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), String> {
        self.request::<MessageResponse>("DELETE", &format!("/api/posts/{}", id), None::<&()>)
            .await?;
        Ok(())
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}
