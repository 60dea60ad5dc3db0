/// Comment handlers - HTTP endpoints for comment operations
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    pub post_id: Uuid,
    pub content: Option<String>,
}

/// Create a comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let content = req.content.as_deref().unwrap_or("");
    let comment = service
        .create_comment(req.post_id, user_id.0, content)
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Delete a comment (author only)
pub async fn delete_comment(
    pool: web::Data<PgPool>,
    comment_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service.delete_comment(*comment_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(comment))
}
