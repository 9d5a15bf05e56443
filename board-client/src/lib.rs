//! Typed HTTP client for the bulletin board API.

pub mod error;
pub mod http_client;
pub mod models;

pub use error::BoardClientError;
pub use http_client::BoardClient;
pub use models::{CreatePostRequest, HealthResponse, Post, UpdatePostRequest};
