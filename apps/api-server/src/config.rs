//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use quill_infra::DatabaseConfig;

/// Default lifetime of cached global-feed pages, in seconds.
///
/// Overridable via FEED_CACHE_TTL_SECS; 0 disables the page cache entirely.
const DEFAULT_FEED_CACHE_TTL_SECS: u64 = 20;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub feed_cache_ttl_secs: u64,
    pub media_root: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database,
            feed_cache_ttl_secs: env::var("FEED_CACHE_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_FEED_CACHE_TTL_SECS),
            media_root: env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string()),
        }
    }

    /// The page-cache TTL, or `None` when caching is disabled.
    pub fn feed_cache_ttl(&self) -> Option<Duration> {
        (self.feed_cache_ttl_secs > 0).then(|| Duration::from_secs(self.feed_cache_ttl_secs))
    }
}
