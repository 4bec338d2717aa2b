use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Group entity - a named collection that posts can be published into.
///
/// Groups are created by administrators and referenced by posts via an
/// optional foreign key. The slug is the stable public identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
}

impl Group {
    pub fn new(title: String, slug: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            description,
        }
    }
}
