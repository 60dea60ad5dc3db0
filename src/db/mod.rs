/// Database access layer
///
/// Repository functions over sqlx. Functions that must participate in a
/// caller-owned transaction take `&mut PgConnection`; everything else takes
/// the pool.
pub mod comment_repo;
pub mod follow_repo;
pub mod like_repo;
pub mod post_repo;
pub mod user_repo;
