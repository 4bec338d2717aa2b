use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Group, Post, User};
use crate::error::RepoError;
use crate::feed::FeedFilter;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific lookups.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Group repository.
#[async_trait]
pub trait GroupRepository: BaseRepository<Group, Uuid> {
    /// Find a group by its unique slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError>;
}

/// Post repository. Feed queries return posts ordered by
/// `created_at DESC, id DESC` so pagination is deterministic.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Count the posts matching a feed filter.
    async fn count(&self, filter: &FeedFilter) -> Result<u64, RepoError>;

    /// Fetch one window of posts matching a feed filter.
    async fn list(&self, filter: &FeedFilter, offset: u64, limit: u64)
    -> Result<Vec<Post>, RepoError>;
}

/// Comment repository.
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    /// All comments on a post, oldest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}

/// Follow-edge repository. Edge uniqueness on (follower, author) is enforced
/// at this level; the follow graph service adds the no-self-follow rule.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Insert the edge if absent; returns true if a new edge was created.
    async fn create_if_absent(&self, follower_id: Uuid, author_id: Uuid)
    -> Result<bool, RepoError>;

    /// Remove the edge if present; returns true if an edge was removed.
    async fn remove(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool, RepoError>;

    /// Whether the edge exists.
    async fn exists(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool, RepoError>;

    /// IDs of all authors the given user follows.
    async fn authors_followed_by(&self, follower_id: Uuid) -> Result<Vec<Uuid>, RepoError>;
}
