//! Feed composition - ordered, paginated views over filtered sets of posts.

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::domain::Post;
use crate::error::RepoError;
use crate::ports::PostRepository;

/// Fixed number of posts per feed page.
pub const PAGE_SIZE: u64 = 10;

/// Which subset of posts a feed shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedFilter {
    /// Every post (the global feed).
    All,
    /// Posts published into one group.
    Group(Uuid),
    /// Posts by a single author (profile feed).
    Author(Uuid),
    /// Posts by any of the given authors (follow feed).
    Authors(Vec<Uuid>),
}

/// One page of a feed plus its pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub number: u64,
    pub pages: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl FeedPage {
    fn empty() -> Self {
        Self {
            posts: Vec::new(),
            number: 1,
            pages: 1,
            total: 0,
            has_next: false,
            has_previous: false,
        }
    }
}

/// Builds feed pages through the post repository port.
///
/// Ordering is `created_at DESC, id DESC` (provided by the repository) so
/// pages are stable even when timestamps collide. Out-of-range page numbers
/// clamp to the nearest valid page instead of erroring.
pub struct FeedComposer {
    posts: Arc<dyn PostRepository>,
}

impl FeedComposer {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Compose one page of the feed selected by `filter`.
    ///
    /// `requested` is the raw page number from the query string; `None` or 0
    /// means the first page. An empty author set yields an empty page without
    /// touching the repository.
    pub async fn page(
        &self,
        filter: FeedFilter,
        requested: Option<u64>,
    ) -> Result<FeedPage, RepoError> {
        if matches!(&filter, FeedFilter::Authors(authors) if authors.is_empty()) {
            return Ok(FeedPage::empty());
        }

        let total = self.posts.count(&filter).await?;
        let pages = page_count(total);
        let number = clamp_page(requested, pages);
        let offset = (number - 1) * PAGE_SIZE;

        let posts = self.posts.list(&filter, offset, PAGE_SIZE).await?;

        Ok(FeedPage {
            posts,
            number,
            pages,
            total,
            has_next: number < pages,
            has_previous: number > 1,
        })
    }
}

/// Total number of pages; an empty feed still has one (empty) page.
fn page_count(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp a requested page number into `1..=pages`.
fn clamp_page(requested: Option<u64>, pages: u64) -> u64 {
    requested.unwrap_or(1).clamp(1, pages)
}
