//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`: SeaORM
//! repositories (plus in-memory fallbacks), the TTL page cache, JWT + Argon2
//! authentication, and the filesystem media store.

pub mod auth;
pub mod cache;
pub mod database;
pub mod media;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use cache::InMemoryCache;
pub use database::{DatabaseConfig, DatabaseConnection};
pub use media::FsMediaStore;
