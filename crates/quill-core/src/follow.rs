//! Follow graph management - directed follower -> author edges.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::RepoError;
use crate::ports::FollowRepository;

/// Creates and removes follow edges.
///
/// Both operations are idempotent: following twice leaves exactly one edge,
/// unfollowing an absent edge is a no-op. Self-follows are silently ignored.
pub struct FollowGraph {
    follows: Arc<dyn FollowRepository>,
}

impl FollowGraph {
    pub fn new(follows: Arc<dyn FollowRepository>) -> Self {
        Self { follows }
    }

    /// Follow an author; returns true if a new edge was created.
    pub async fn follow(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        if follower_id == author_id {
            return Ok(false);
        }
        self.follows.create_if_absent(follower_id, author_id).await
    }

    /// Unfollow an author; returns true if an edge was removed.
    pub async fn unfollow(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        self.follows.remove(follower_id, author_id).await
    }

    /// Whether `viewer` follows `author`. Anonymous viewers follow nobody.
    pub async fn is_following(
        &self,
        viewer: Option<Uuid>,
        author_id: Uuid,
    ) -> Result<bool, RepoError> {
        match viewer {
            Some(viewer_id) => self.follows.exists(viewer_id, author_id).await,
            None => Ok(false),
        }
    }

    /// IDs of every author the user follows.
    pub async fn followed_authors(&self, follower_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        self.follows.authors_followed_by(follower_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingFollowRepo {
        creates: AtomicUsize,
    }

    #[async_trait]
    impl FollowRepository for CountingFollowRepo {
        async fn create_if_absent(
            &self,
            _follower_id: Uuid,
            _author_id: Uuid,
        ) -> Result<bool, RepoError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            Ok(true)
        }
        async fn remove(&self, _follower_id: Uuid, _author_id: Uuid) -> Result<bool, RepoError> {
            Ok(false)
        }
        async fn exists(&self, _follower_id: Uuid, _author_id: Uuid) -> Result<bool, RepoError> {
            Ok(true)
        }
        async fn authors_followed_by(&self, _follower_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_self_follow_is_silent_noop() {
        let repo = Arc::new(CountingFollowRepo::default());
        let graph = FollowGraph::new(repo.clone());
        let user = Uuid::new_v4();

        let created = graph.follow(user, user).await.unwrap();

        assert!(!created);
        assert_eq!(repo.creates.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_anonymous_viewer_is_not_following() {
        let graph = FollowGraph::new(Arc::new(CountingFollowRepo::default()));

        let following = graph.is_following(None, Uuid::new_v4()).await.unwrap();

        assert!(!following);
    }
}
