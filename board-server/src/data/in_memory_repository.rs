use crate::data::post_repository::PostRepository;
use crate::domain::post::{CreatePostRequest, UpdatePostRequest};
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Vec-backed `PostRepository` for service and handler tests.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    unavailable: bool,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails like a lost database connection.
    pub fn unavailable() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            unavailable: true,
        }
    }

    pub async fn len(&self) -> usize {
        self.posts.lock().await.len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable {
            Err(DomainError::DatabaseError(
                "connection refused".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        self.check_available()?;
        let post = Post::new(req);
        self.posts.lock().await.push(post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Post, DomainError> {
        self.check_available()?;
        self.posts
            .lock()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(DomainError::PostNotFound)
    }

    async fn update(&self, id: Uuid, req: UpdatePostRequest) -> Result<Post, DomainError> {
        self.check_available()?;
        let mut posts = self.posts.lock().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PostNotFound)?;

        if let Some(title) = req.title {
            post.title = title;
        }
        if let Some(content) = req.content {
            post.content = content;
        }
        if let Some(author) = req.author {
            post.author = author;
        }
        post.updated_at = Utc::now().max(post.updated_at);

        Ok(post.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.check_available()?;
        let mut posts = self.posts.lock().await;
        let before = posts.len();
        posts.retain(|p| p.id != id);

        if posts.len() == before {
            Err(DomainError::PostNotFound)
        } else {
            Ok(())
        }
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        self.check_available()?;
        // Reverse first so equal timestamps still come out newest-insert first.
        let mut posts: Vec<Post> = self.posts.lock().await.iter().rev().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }
}
