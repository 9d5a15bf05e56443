use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DomainError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/posts`. Missing fields deserialize to empty strings so
/// that presence is checked by the service, not by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl CreatePostRequest {
    pub fn has_required_fields(&self) -> bool {
        [&self.title, &self.content, &self.author]
            .iter()
            .all(|field| !field.is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

impl Post {
    pub fn new(req: CreatePostRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: req.title,
            content: req.content,
            author: req.author,
            created_at: now,
            updated_at: now,
        }
    }
}

pub fn parse_post_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| DomainError::MalformedId(format!("{}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, content: &str, author: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: title.to_string(),
            content: content.to_string(),
            author: author.to_string(),
        }
    }

    #[test]
    fn required_fields_must_be_non_empty() {
        assert!(request("Hello", "World", "Alice").has_required_fields());
        assert!(request("Hello", "   ", "Alice").has_required_fields());
        assert!(!request("", "World", "Alice").has_required_fields());
        assert!(!request("Hello", "", "Alice").has_required_fields());
        assert!(!request("Hello", "World", "").has_required_fields());
    }

    #[test]
    fn missing_json_fields_become_empty() {
        let req: CreatePostRequest = serde_json::from_str(r#"{"title":"Hello"}"#).unwrap();
        assert_eq!(req.title, "Hello");
        assert!(req.content.is_empty());
        assert!(!req.has_required_fields());
    }

    #[test]
    fn new_post_has_equal_timestamps() {
        let post = Post::new(request("Hello", "World", "Alice"));
        assert_eq!(post.created_at, post.updated_at);
    }

    #[test]
    fn response_uses_camel_case_and_string_id() {
        let post = Post::new(request("Hello", "World", "Alice"));
        let id = post.id.to_string();
        let json = serde_json::to_value(PostResponse::from(post)).unwrap();

        assert_eq!(json["id"], id.as_str());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn parse_post_id_rejects_garbage() {
        assert!(parse_post_id(&Uuid::new_v4().to_string()).is_ok());
        assert!(matches!(
            parse_post_id("not-an-id"),
            Err(DomainError::MalformedId(_))
        ));
    }
}
