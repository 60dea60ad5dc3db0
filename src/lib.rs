/// Post Service Library
///
/// Backend for a small social network: posts, comments, likes, and the
/// follow graph, served as a REST JSON API over PostgreSQL.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Row types and API response views
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: JWT authentication middleware
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
