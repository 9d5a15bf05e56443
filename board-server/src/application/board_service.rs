use crate::data::post_repository::PostRepository;
use crate::domain::post::{parse_post_id, CreatePostRequest, PostResponse, UpdatePostRequest};
use crate::domain::DomainError;
use std::sync::Arc;

pub const MISSING_FIELDS_MESSAGE: &str = "Title, content, and author are required";

pub struct BoardService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl BoardService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<PostResponse, DomainError> {
        if !req.has_required_fields() {
            return Err(DomainError::ValidationError(
                MISSING_FIELDS_MESSAGE.to_string(),
            ));
        }

        let post = self.post_repo.create(req).await?;

        tracing::info!("Post created: id={}, author={}", post.id, post.author);

        Ok(PostResponse::from(post))
    }

    pub async fn get_post(&self, id: &str) -> Result<PostResponse, DomainError> {
        let id = parse_post_id(id)?;
        let post = self.post_repo.find_by_id(id).await?;
        Ok(PostResponse::from(post))
    }

    /// Merges the supplied fields into the stored post. An empty update is
    /// accepted and only refreshes `updated_at`.
    pub async fn update_post(
        &self,
        id: &str,
        req: UpdatePostRequest,
    ) -> Result<PostResponse, DomainError> {
        let id = parse_post_id(id)?;
        let updated_post = self.post_repo.update(id, req).await?;

        tracing::info!("Post updated: id={}", id);

        Ok(PostResponse::from(updated_post))
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), DomainError> {
        let id = parse_post_id(id)?;
        self.post_repo.delete(id).await?;

        tracing::info!("Post deleted: id={}", id);

        Ok(())
    }

    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.post_repo.list().await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }
}
