/// Like handlers - HTTP endpoints for liking and unliking posts
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::LikeService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    pub post_id: Uuid,
}

/// Like a post
pub async fn like_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<LikeRequest>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let like = service.like_post(req.post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(like))
}

/// Remove the viewer's like from a post
pub async fn unlike_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    service.unlike_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "postId": *post_id })))
}
