/// Business logic layer
pub mod comments;
pub mod follows;
pub mod likes;
pub mod posts;

pub use comments::CommentService;
pub use follows::FollowService;
pub use likes::LikeService;
pub use posts::PostService;

use uuid::Uuid;

/// Ownership check shared by post and comment deletion.
/// No role hierarchy, no admin override: the author and only the author.
pub fn is_owner(owner_id: Uuid, requester_id: Uuid) -> bool {
    owner_id == requester_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_matches_only_itself() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        assert!(is_owner(a, a));
        assert!(!is_owner(a, b));
        assert!(!is_owner(b, a));
    }
}
