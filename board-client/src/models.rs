use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==================== Модели постов ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
}

/// Partial update; `None` fields are left out of the body and keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

// ==================== Служебные ответы ====================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthEnv {
    pub app_env: String,
    pub has_database_url: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub env: HealthEnv,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// ==================== Общие ошибки ====================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_server_json() {
        let json = r#"{
            "id": "0b7c4a52-9f0e-4a4b-8a57-0a8f1f2b6c11",
            "title": "Hello",
            "content": "line one\nline two",
            "author": "Alice",
            "createdAt": "2025-03-01T10:00:00Z",
            "updatedAt": "2025-03-01T10:05:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();

        assert_eq!(post.author, "Alice");
        assert_eq!(post.content, "line one\nline two");
        assert!(post.created_at < post.updated_at);
    }

    #[test]
    fn update_request_omits_unset_fields() {
        let req = UpdatePostRequest {
            content: Some("World!".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json, serde_json::json!({ "content": "World!" }));
    }

    #[test]
    fn health_parses_camel_case_env() {
        let json = r#"{"status":"ok","timestamp":"2025-03-01T10:00:00+00:00","env":{"appEnv":"development","hasDatabaseUrl":true}}"#;

        let health: HealthResponse = serde_json::from_str(json).unwrap();

        assert_eq!(health.status, "ok");
        assert!(health.env.has_database_url);
    }
}
