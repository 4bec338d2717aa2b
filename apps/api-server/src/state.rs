//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use quill_core::feed::FeedComposer;
use quill_core::follow::FollowGraph;
use quill_core::ports::{
    Cache, CommentRepository, FollowRepository, GroupRepository, MediaStore, PostRepository,
    UserRepository,
};
use quill_infra::cache::InMemoryCache;
use quill_infra::database::{
    DatabaseConnection, InMemoryCommentRepository, InMemoryFollowRepository,
    InMemoryGroupRepository, InMemoryPostRepository, InMemoryUserRepository,
    PostgresCommentRepository, PostgresFollowRepository, PostgresGroupRepository,
    PostgresPostRepository, PostgresUserRepository,
};
use quill_infra::media::FsMediaStore;

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub groups: Arc<dyn GroupRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub follows: Arc<dyn FollowRepository>,
    pub cache: Arc<dyn Cache>,
    pub media: Arc<dyn MediaStore>,
    pub feed_cache_ttl: Option<Duration>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        if let Some(db_config) = &config.database {
            match DatabaseConnection::init(db_config).await {
                Ok(db) => {
                    let conn = db.conn;
                    tracing::info!("Application state initialized (postgres)");
                    return Self {
                        users: Arc::new(PostgresUserRepository::new(conn.clone())),
                        groups: Arc::new(PostgresGroupRepository::new(conn.clone())),
                        posts: Arc::new(PostgresPostRepository::new(conn.clone())),
                        comments: Arc::new(PostgresCommentRepository::new(conn.clone())),
                        follows: Arc::new(PostgresFollowRepository::new(conn)),
                        cache: Arc::new(InMemoryCache::new()),
                        media: Arc::new(FsMediaStore::new(&config.media_root)),
                        feed_cache_ttl: config.feed_cache_ttl(),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        Self::in_memory(config.feed_cache_ttl(), &config.media_root)
    }

    /// State backed entirely by in-memory implementations.
    pub fn in_memory(feed_cache_ttl: Option<Duration>, media_root: &str) -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::default()),
            groups: Arc::new(InMemoryGroupRepository::default()),
            posts: Arc::new(InMemoryPostRepository::default()),
            comments: Arc::new(InMemoryCommentRepository::default()),
            follows: Arc::new(InMemoryFollowRepository::default()),
            cache: Arc::new(InMemoryCache::new()),
            media: Arc::new(FsMediaStore::new(media_root)),
            feed_cache_ttl,
        }
    }

    /// Feed composer over the post repository.
    pub fn feed_composer(&self) -> FeedComposer {
        FeedComposer::new(self.posts.clone())
    }

    /// Follow graph manager over the follow repository.
    pub fn follow_graph(&self) -> FollowGraph {
        FollowGraph::new(self.follows.clone())
    }
}
