/// Follow service - follow graph edges between users
use crate::db::follow_repo;
use crate::error::{AppError, Result};
use sqlx::PgPool;
use uuid::Uuid;

pub struct FollowService {
    pool: PgPool,
}

impl FollowService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Follow another user; duplicate edges are ignored.
    /// Returns true if a new edge was created.
    pub async fn follow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<bool> {
        if follower_id == followee_id {
            return Err(AppError::ValidationError(
                "Cannot follow yourself".into(),
            ));
        }

        let created = follow_repo::insert_follow(&self.pool, follower_id, followee_id).await?;
        if created {
            tracing::info!(%follower_id, %followee_id, "follow created");
        }

        Ok(created)
    }

    /// Remove a follow edge
    pub async fn unfollow(&self, follower_id: Uuid, followee_id: Uuid) -> Result<()> {
        let removed = follow_repo::delete_follow(&self.pool, follower_id, followee_id).await?;
        if !removed {
            return Err(AppError::NotFound("Follow was not found".into()));
        }

        Ok(())
    }
}
