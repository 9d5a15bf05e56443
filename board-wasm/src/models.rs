use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

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

impl Post {
    pub fn created_label(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M UTC").to_string()
    }
}

/// Body of both create and update requests; the form always sends every field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostFormData {
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<&Post> for PostFormData {
    fn from(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
