use crate::models::UserSummary;
use sqlx::PgPool;
use uuid::Uuid;

/// Fetch the restricted projection for a set of users.
/// Only id, email, name, and avatar_url are ever selected here.
pub async fn find_summaries_by_ids(
    pool: &PgPool,
    user_ids: &[Uuid],
) -> Result<Vec<UserSummary>, sqlx::Error> {
    if user_ids.is_empty() {
        return Ok(Vec::new());
    }

    let users = sqlx::query_as::<_, UserSummary>(
        r#"
        SELECT id, email, name, avatar_url
        FROM users
        WHERE id = ANY($1)
        "#,
    )
    .bind(user_ids)
    .fetch_all(pool)
    .await?;

    Ok(users)
}
