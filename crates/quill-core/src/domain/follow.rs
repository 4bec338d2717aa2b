use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Follow entity - a directed edge from a follower to an author.
///
/// At most one edge exists per (follower, author) pair, and self-edges are
/// never created; the follow graph service enforces both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Follow {
    pub id: Uuid,
    pub follower_id: Uuid,
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Follow {
    pub fn new(follower_id: Uuid, author_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            follower_id,
            author_id,
            created_at: Utc::now(),
        }
    }
}
