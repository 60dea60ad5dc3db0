/// Follow handlers - HTTP endpoints for the follow graph
use crate::error::Result;
use crate::middleware::UserId;
use crate::services::FollowService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowRequest {
    pub followee_id: Uuid,
}

/// Follow another user
pub async fn follow_user(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<FollowRequest>,
) -> Result<HttpResponse> {
    let service = FollowService::new((**pool).clone());
    let created = service.follow(user_id.0, req.followee_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "followeeId": req.followee_id,
        "created": created,
    })))
}

/// Unfollow a user
pub async fn unfollow_user(
    pool: web::Data<PgPool>,
    followee_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = FollowService::new((**pool).clone());
    service.unfollow(user_id.0, *followee_id).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "followeeId": *followee_id })))
}
