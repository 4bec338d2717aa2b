use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a text entry authored by a user, optionally published into a
/// group and optionally carrying an uploaded image (stored by path).
///
/// Mutable only by its author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub group_id: Option<Uuid>,
    pub text: String,
    pub image_path: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post.
    pub fn new(
        author_id: Uuid,
        text: String,
        group_id: Option<Uuid>,
        image_path: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            author_id,
            group_id,
            text,
            image_path,
            created_at: now,
            updated_at: now,
        }
    }
}
