/// Post service - aggregation and authorization logic for posts
///
/// Produces posts enriched for a specific viewer (author projection,
/// comments, likes, derived liked_by_user flag) and enforces
/// authorship-based delete authorization with a transactional cascade.
use crate::db::{comment_repo, like_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{Comment, CommentView, DeletionSummary, Like, Post, PostView, UserSummary};
use crate::services::is_owner;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new post owned by `author_id`
    pub async fn create_post(&self, author_id: Uuid, content: &str) -> Result<Post> {
        if content.trim().is_empty() {
            return Err(AppError::ValidationError("Content is required".into()));
        }

        let post = post_repo::insert_post(&self.pool, author_id, content).await?;
        tracing::info!(post_id = %post.id, author_id = %author_id, "post created");

        Ok(post)
    }

    /// Fetch all posts enriched for `viewer_id`, newest first
    pub async fn list_posts(&self, viewer_id: Uuid) -> Result<Vec<PostView>> {
        let posts = post_repo::find_all_posts(&self.pool).await?;
        let post_ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();

        let comments = comment_repo::find_comments_by_posts(&self.pool, &post_ids).await?;
        let likes = like_repo::find_likes_by_posts(&self.pool, &post_ids).await?;

        let author_ids: Vec<Uuid> = posts.iter().map(|p| p.author_id).collect();
        let authors = user_repo::find_summaries_by_ids(&self.pool, &author_ids).await?;
        let authors_by_id: HashMap<Uuid, UserSummary> =
            authors.into_iter().map(|u| (u.id, u)).collect();

        let mut comments_by_post: HashMap<Uuid, Vec<Comment>> = HashMap::new();
        for comment in comments {
            comments_by_post.entry(comment.post_id).or_default().push(comment);
        }

        let mut likes_by_post: HashMap<Uuid, Vec<Like>> = HashMap::new();
        for like in likes {
            likes_by_post.entry(like.post_id).or_default().push(like);
        }

        let views = posts
            .into_iter()
            .map(|post| {
                let post_comments = comments_by_post
                    .remove(&post.id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|c| comment_view(c, None))
                    .collect();
                let post_likes = likes_by_post.remove(&post.id).unwrap_or_default();
                let author = authors_by_id.get(&post.author_id).cloned();
                enrich_for_viewer(post, post_comments, post_likes, author, viewer_id)
            })
            .collect();

        Ok(views)
    }

    /// Fetch a single post enriched for `viewer_id`, with the full comment
    /// thread carrying author projections
    pub async fn get_post(&self, post_id: Uuid, viewer_id: Uuid) -> Result<PostView> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post was not found".into()))?;

        let comments = comment_repo::find_comments_by_post(&self.pool, post_id).await?;
        let likes = like_repo::find_likes_by_post(&self.pool, post_id).await?;

        let mut user_ids: Vec<Uuid> = comments.iter().map(|c| c.user_id).collect();
        user_ids.push(post.author_id);
        user_ids.sort_unstable();
        user_ids.dedup();

        let users = user_repo::find_summaries_by_ids(&self.pool, &user_ids).await?;
        let users_by_id: HashMap<Uuid, UserSummary> =
            users.into_iter().map(|u| (u.id, u)).collect();

        let comment_views = comments
            .into_iter()
            .map(|c| {
                let user = users_by_id.get(&c.user_id).cloned();
                comment_view(c, user)
            })
            .collect();

        let author = users_by_id.get(&post.author_id).cloned();

        Ok(enrich_for_viewer(post, comment_views, likes, author, viewer_id))
    }

    /// Delete a post the requester owns, cascading to its comments and likes.
    ///
    /// The three deletions run in one transaction: a failure anywhere rolls
    /// back everything, so no orphaned comment or like rows can remain.
    pub async fn delete_post(&self, post_id: Uuid, requester_id: Uuid) -> Result<DeletionSummary> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post was not found".into()))?;

        if !is_owner(post.author_id, requester_id) {
            return Err(AppError::Forbidden("Only the author can delete a post".into()));
        }

        let mut tx = self.pool.begin().await?;

        let comments_deleted = comment_repo::delete_comments_by_post(&mut *tx, post_id).await?;
        let likes_deleted = like_repo::delete_likes_by_post(&mut *tx, post_id).await?;
        post_repo::delete_post(&mut *tx, post_id).await?;

        tx.commit().await?;

        tracing::info!(
            post_id = %post_id,
            comments_deleted,
            likes_deleted,
            "post deleted with cascade"
        );

        Ok(DeletionSummary {
            post_id,
            comments_deleted,
            likes_deleted,
        })
    }
}

fn comment_view(comment: Comment, user: Option<UserSummary>) -> CommentView {
    CommentView {
        id: comment.id,
        post_id: comment.post_id,
        user_id: comment.user_id,
        content: comment.content,
        created_at: comment.created_at,
        user,
    }
}

/// Build the per-viewer view of a post. `liked_by_user` is derived here and
/// nowhere else: true iff one of the post's likes belongs to the viewer.
fn enrich_for_viewer(
    post: Post,
    comments: Vec<CommentView>,
    likes: Vec<Like>,
    author: Option<UserSummary>,
    viewer_id: Uuid,
) -> PostView {
    let liked_by_user = likes.iter().any(|like| like.user_id == viewer_id);

    PostView {
        id: post.id,
        author_id: post.author_id,
        content: post.content,
        created_at: post.created_at,
        author,
        comments,
        likes,
        liked_by_user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(author_id: Uuid) -> Post {
        Post {
            id: Uuid::new_v4(),
            author_id,
            content: "hello".to_string(),
            created_at: Utc::now(),
        }
    }

    fn like(post_id: Uuid, user_id: Uuid) -> Like {
        Like {
            id: Uuid::new_v4(),
            post_id,
            user_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn liked_by_user_true_only_for_matching_like_row() {
        let author = Uuid::new_v4();
        let viewer = Uuid::new_v4();
        let other = Uuid::new_v4();
        let p = post(author);

        let view = enrich_for_viewer(
            p.clone(),
            vec![],
            vec![like(p.id, other), like(p.id, viewer)],
            None,
            viewer,
        );
        assert!(view.liked_by_user);

        let view = enrich_for_viewer(p.clone(), vec![], vec![like(p.id, other)], None, viewer);
        assert!(!view.liked_by_user);

        let view = enrich_for_viewer(p, vec![], vec![], None, viewer);
        assert!(!view.liked_by_user);
    }

    #[test]
    fn enrichment_keeps_likes_and_author_intact() {
        let author_id = Uuid::new_v4();
        let viewer = Uuid::new_v4();
        let p = post(author_id);
        let author = UserSummary {
            id: author_id,
            email: "author@example.com".to_string(),
            name: Some("Author".to_string()),
            avatar_url: None,
        };

        let view = enrich_for_viewer(
            p.clone(),
            vec![],
            vec![like(p.id, viewer)],
            Some(author.clone()),
            viewer,
        );

        assert_eq!(view.id, p.id);
        assert_eq!(view.likes.len(), 1);
        assert_eq!(view.author.as_ref().map(|a| a.id), Some(author_id));
        assert!(view.liked_by_user);
    }
}
