//! Author profiles and the follow/unfollow endpoints.

use actix_web::{HttpResponse, http::header, web};

use quill_core::domain::User;
use quill_core::feed::FeedFilter;
use quill_shared::dto::{ProfileFeedResponse, ProfileResponse};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::feeds::PageQuery;
use super::render::{page_meta, post_responses, user_response};

async fn find_author(state: &AppState, username: &str) -> AppResult<User> {
    state
        .users
        .find_by_username(username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User '{}' not found", username)))
}

/// GET /api/users/{username} - an author's profile.
pub async fn profile(
    state: web::Data<AppState>,
    username: web::Path<String>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &username).await?;

    let viewer = identity.0.map(|i| i.user_id);
    let following = state.follow_graph().is_following(viewer, author.id).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse {
        author: user_response(&author),
        following,
    }))
}

/// GET /api/users/{username}/posts - an author's posts, newest first.
pub async fn profile_feed(
    state: web::Data<AppState>,
    username: web::Path<String>,
    query: web::Query<PageQuery>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &username).await?;

    let viewer = identity.0.map(|i| i.user_id);
    let following = state.follow_graph().is_following(viewer, author.id).await?;

    let page = state
        .feed_composer()
        .page(FeedFilter::Author(author.id), query.page)
        .await?;

    Ok(HttpResponse::Ok().json(ProfileFeedResponse {
        author: user_response(&author),
        following,
        posts: post_responses(&state, &page.posts).await?,
        page: page_meta(&page),
    }))
}

fn profile_redirect(username: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/api/users/{}", username)))
        .finish()
}

/// GET /api/users/{username}/follow - start following an author.
///
/// Idempotent; self-follows are silently ignored. Redirects back to the
/// author's profile either way.
pub async fn profile_follow(
    state: web::Data<AppState>,
    username: web::Path<String>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &username).await?;

    let created = state
        .follow_graph()
        .follow(identity.user_id, author.id)
        .await?;
    if created {
        tracing::info!(follower = %identity.username, author = %author.username, "Follow created");
    }

    Ok(profile_redirect(&username))
}

/// GET /api/users/{username}/unfollow - stop following an author.
pub async fn profile_unfollow(
    state: web::Data<AppState>,
    username: web::Path<String>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let author = find_author(&state, &username).await?;

    state
        .follow_graph()
        .unfollow(identity.user_id, author.id)
        .await?;

    Ok(profile_redirect(&username))
}
