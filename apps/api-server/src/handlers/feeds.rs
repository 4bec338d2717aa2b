//! Feed endpoints: global feed, group feed, and the followed-authors feed.

use actix_web::{HttpResponse, http::header::ContentType, web};
use serde::Deserialize;

use quill_core::feed::FeedFilter;
use quill_shared::dto::{FeedResponse, GroupFeedResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::render::{group_response, page_meta, post_responses};

/// Page selector on feed routes; out-of-range values clamp, never error.
#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u64>,
}

/// GET /api/posts - the global feed, newest first.
///
/// Responses are cached per page number with a fixed TTL; writes do not
/// invalidate the cache, so a new post may not appear until expiry. Only
/// pages that exist get cache entries: an out-of-range request serves the
/// clamped page without writing, so the keyspace is bounded by the real
/// page count rather than by whatever numbers clients ask for.
pub async fn index(
    state: web::Data<AppState>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let requested = query.page.unwrap_or(1).max(1);
    let cache_key = format!("feed:index:{requested}");

    if let Some(body) = state.cache.get(&cache_key).await {
        tracing::debug!(key = %cache_key, "Serving global feed from page cache");
        return Ok(HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body));
    }

    let page = state.feed_composer().page(FeedFilter::All, query.page).await?;
    let response = FeedResponse {
        posts: post_responses(&state, &page.posts).await?,
        page: page_meta(&page),
    };

    let body = serde_json::to_string(&response).map_err(|e| AppError::Internal(e.to_string()))?;

    if page.number == requested {
        if let Some(ttl) = state.feed_cache_ttl {
            if let Err(e) = state.cache.set(&cache_key, &body, Some(ttl)).await {
                tracing::warn!("Failed to cache global feed page: {}", e);
            }
        }
    }

    Ok(HttpResponse::Ok()
        .content_type(ContentType::json())
        .body(body))
}

/// GET /api/groups/{slug}/posts - posts published into one group.
pub async fn group_feed(
    state: web::Data<AppState>,
    slug: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let group = state
        .groups
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Group '{}' not found", slug)))?;

    let page = state
        .feed_composer()
        .page(FeedFilter::Group(group.id), query.page)
        .await?;

    Ok(HttpResponse::Ok().json(GroupFeedResponse {
        group: group_response(&group),
        posts: post_responses(&state, &page.posts).await?,
        page: page_meta(&page),
    }))
}

/// GET /api/feed - posts by the authors the caller follows.
///
/// Following nobody yields an empty page, not an error.
pub async fn follow_feed(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let authors = state.follow_graph().followed_authors(identity.user_id).await?;

    let page = state
        .feed_composer()
        .page(FeedFilter::Authors(authors), query.page)
        .await?;

    Ok(HttpResponse::Ok().json(FeedResponse {
        posts: post_responses(&state, &page.posts).await?,
        page: page_meta(&page),
    }))
}
