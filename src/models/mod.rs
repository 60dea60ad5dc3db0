/// Data models for post-service
///
/// Row types map directly onto the relational schema; view types are what the
/// API serializes. Wire names are camelCase to match the client contract.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a user's post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Like entity - represents a user liking a post
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Follow edge - follower follows followee
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Follow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub followee_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Restricted author projection - the only user fields the API exposes.
/// Credentials and other sensitive columns are never selected.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
}

/// Comment with its author projection attached (single-post view).
/// List responses carry comments without the projection; the field is
/// omitted from the wire entirely in that case.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentView {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

/// Post enriched for a specific viewer.
///
/// `liked_by_user` is derived per request and never persisted: it is true
/// iff a like row exists for (post id, viewer id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author: Option<UserSummary>,
    pub comments: Vec<CommentView>,
    pub likes: Vec<Like>,
    pub liked_by_user: bool,
}

/// Summary returned by a cascade delete
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionSummary {
    pub post_id: Uuid,
    pub comments_deleted: u64,
    pub likes_deleted: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn comment_view(user: Option<UserSummary>) -> CommentView {
        CommentView {
            id: Uuid::new_v4(),
            post_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            content: "hi".to_string(),
            created_at: Utc::now(),
            user,
        }
    }

    #[test]
    fn comment_without_projection_omits_user_key() {
        let json = serde_json::to_value(comment_view(None)).unwrap();
        assert!(json.get("user").is_none());
        assert!(json.get("postId").is_some());
    }

    #[test]
    fn comment_with_projection_serializes_user() {
        let user = UserSummary {
            id: Uuid::new_v4(),
            email: "commenter@example.com".to_string(),
            name: None,
            avatar_url: None,
        };
        let json = serde_json::to_value(comment_view(Some(user))).unwrap();
        assert_eq!(json["user"]["email"], "commenter@example.com");
    }
}
