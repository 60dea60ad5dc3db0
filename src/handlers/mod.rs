/// HTTP request handlers
pub mod comments;
pub mod follows;
pub mod likes;
pub mod posts;

pub use comments::*;
pub use follows::*;
pub use likes::*;
pub use posts::*;
