/// Comment service - comment creation and deletion
///
/// Deletion applies the same ownership check as posts: only the comment's
/// author may remove it.
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use crate::services::is_owner;
use sqlx::PgPool;
use uuid::Uuid;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a comment on an existing post
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        content: &str,
    ) -> Result<Comment> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError("Content is required".into()));
        }

        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post was not found".into()))?;

        let comment = comment_repo::insert_comment(&self.pool, post_id, user_id, content).await?;
        tracing::info!(comment_id = %comment.id, post_id = %post_id, "comment created");

        Ok(comment)
    }

    /// Delete a comment the requester owns; returns the removed comment
    pub async fn delete_comment(&self, comment_id: Uuid, requester_id: Uuid) -> Result<Comment> {
        let comment = comment_repo::find_comment_by_id(&self.pool, comment_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Comment was not found".into()))?;

        if !is_owner(comment.user_id, requester_id) {
            return Err(AppError::Forbidden(
                "Only the author can delete a comment".into(),
            ));
        }

        comment_repo::delete_comment(&self.pool, comment_id).await?;
        tracing::info!(comment_id = %comment_id, "comment deleted");

        Ok(comment)
    }
}
