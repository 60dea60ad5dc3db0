/// Post handlers - HTTP endpoints for post operations
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::PostService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub content: Option<String>,
}

/// Create a new post
pub async fn create_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let content = req.content.as_deref().unwrap_or("");
    let post = service.create_post(user_id.0, content).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Get all posts enriched for the viewer
pub async fn list_posts(pool: web::Data<PgPool>, user_id: UserId) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts(user_id.0).await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID with its full comment thread
pub async fn get_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post (author only); cascades to comments and likes
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let summary = service.delete_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Ok().json(summary))
}
