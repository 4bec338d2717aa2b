//! Database connection management and repository implementations.

mod connections;
pub mod entity;
pub mod memory;
mod postgres_base;
pub mod postgres_repo;

pub use connections::{DatabaseConfig, DatabaseConnection};
pub use memory::{
    InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
    InMemoryPostRepository, InMemoryUserRepository,
};
pub use postgres_repo::{
    PostgresCommentRepository, PostgresFollowRepository, PostgresGroupRepository,
    PostgresPostRepository, PostgresUserRepository,
};
