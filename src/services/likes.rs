/// Like service - like/unlike a post
///
/// At most one like per (post, user): the unique constraint in the store is
/// the source of truth, and a violation surfaces as a conflict.
use crate::db::{like_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Like;
use sqlx::PgPool;
use uuid::Uuid;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Like an existing post
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Like> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post was not found".into()))?;

        match like_repo::insert_like(&self.pool, post_id, user_id).await {
            Ok(like) => Ok(like),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(AppError::Conflict("Post already liked".into()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Remove the requester's like from a post
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        let removed = like_repo::delete_like(&self.pool, post_id, user_id).await?;
        if removed == 0 {
            return Err(AppError::NotFound("Like was not found".into()));
        }

        Ok(())
    }
}
