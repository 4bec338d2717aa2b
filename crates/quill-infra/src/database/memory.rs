//! In-memory repository implementations.
//!
//! Used when no database is configured and by the endpoint tests. They honor
//! the same contracts as the Postgres repositories: unique usernames, emails
//! and slugs, edge uniqueness on (follower, author), and feed ordering by
//! `created_at DESC, id DESC`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Comment, Follow, Group, Post, User};
use quill_core::error::RepoError;
use quill_core::feed::FeedFilter;
use quill_core::ports::{
    BaseRepository, CommentRepository, FollowRepository, GroupRepository, PostRepository,
    UserRepository,
};

/// In-memory user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: RwLock<Vec<User>>,
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.id == id).cloned())
    }

    async fn insert(&self, entity: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|u| u.username == entity.username || u.email == entity.email)
        {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: User) -> Result<User, RepoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|u| u.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *row = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|u| u.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|u| u.username == username).cloned())
    }
}

/// In-memory group repository.
#[derive(Default)]
pub struct InMemoryGroupRepository {
    rows: RwLock<Vec<Group>>,
}

#[async_trait]
impl BaseRepository<Group, Uuid> for InMemoryGroupRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|g| g.id == id).cloned())
    }

    async fn insert(&self, entity: Group) -> Result<Group, RepoError> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|g| g.slug == entity.slug) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Group) -> Result<Group, RepoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|g| g.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *row = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|g| g.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|g| g.slug == slug).cloned())
    }
}

fn matches_filter(post: &Post, filter: &FeedFilter) -> bool {
    match filter {
        FeedFilter::All => true,
        FeedFilter::Group(group_id) => post.group_id == Some(*group_id),
        FeedFilter::Author(author_id) => post.author_id == *author_id,
        FeedFilter::Authors(author_ids) => author_ids.contains(&post.author_id),
    }
}

/// In-memory post repository.
#[derive(Default)]
pub struct InMemoryPostRepository {
    rows: RwLock<Vec<Post>>,
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, entity: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Post) -> Result<Post, RepoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|p| p.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *row = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn count(&self, filter: &FeedFilter) -> Result<u64, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|p| matches_filter(p, filter)).count() as u64)
    }

    async fn list(
        &self,
        filter: &FeedFilter,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError> {
        let rows = self.rows.read().await;
        let mut matched: Vec<Post> = rows
            .iter()
            .filter(|p| matches_filter(p, filter))
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matched
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }
}

/// In-memory comment repository.
#[derive(Default)]
pub struct InMemoryCommentRepository {
    rows: RwLock<Vec<Comment>>,
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut rows = self.rows.write().await;
        rows.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: Comment) -> Result<Comment, RepoError> {
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|c| c.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *row = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let rows = self.rows.read().await;
        let mut matched: Vec<Comment> = rows
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        matched.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(matched)
    }
}

/// In-memory follow-edge repository.
#[derive(Default)]
pub struct InMemoryFollowRepository {
    rows: RwLock<Vec<Follow>>,
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn create_if_absent(
        &self,
        follower_id: Uuid,
        author_id: Uuid,
    ) -> Result<bool, RepoError> {
        let mut rows = self.rows.write().await;
        if rows
            .iter()
            .any(|f| f.follower_id == follower_id && f.author_id == author_id)
        {
            return Ok(false);
        }
        rows.push(Follow::new(follower_id, author_id));
        Ok(true)
    }

    async fn remove(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|f| !(f.follower_id == follower_id && f.author_id == author_id));
        Ok(rows.len() != before)
    }

    async fn exists(&self, follower_id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .any(|f| f.follower_id == follower_id && f.author_id == author_id))
    }

    async fn authors_followed_by(&self, follower_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|f| f.follower_id == follower_id)
            .map(|f| f.author_id)
            .collect())
    }
}
