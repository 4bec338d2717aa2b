//! Post authoring endpoints: create, view, edit.

use actix_web::{HttpResponse, http::header, web};
use base64::Engine as _;
use uuid::Uuid;

use quill_core::domain::Post;
use quill_shared::dto::{CreatePostRequest, PostDetailResponse, UpdatePostRequest};

use crate::middleware::auth::{Identity, OptionalIdentity};
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::render::{comment_responses, post_response};

/// Resolve an optional group slug from the request body.
async fn resolve_group(state: &AppState, slug: Option<&str>) -> AppResult<Option<Uuid>> {
    match slug {
        Some(slug) => {
            let group = state
                .groups
                .find_by_slug(slug)
                .await?
                .ok_or_else(|| AppError::BadRequest(format!("Unknown group '{}'", slug)))?;
            Ok(Some(group.id))
        }
        None => Ok(None),
    }
}

/// Decode, validate and store an uploaded image; returns its stored path.
async fn store_image(
    state: &AppState,
    image_b64: &str,
    image_name: Option<&str>,
) -> AppResult<String> {
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(image_b64)
        .map_err(|_| AppError::BadRequest("Image is not valid base64".to_string()))?;

    let extension = quill_core::media::validate_image(&bytes, image_name)?;

    Ok(state.media.store(extension, &bytes).await?)
}

/// POST /api/posts - create a post.
pub async fn create_post(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Enter at least one character".to_string(),
        ));
    }

    let group_id = resolve_group(&state, req.group.as_deref()).await?;

    let image_path = match req.image.as_deref() {
        Some(image) => Some(store_image(&state, image, req.image_name.as_deref()).await?),
        None => None,
    };

    let post = Post::new(identity.user_id, req.text, group_id, image_path);
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, author = %identity.username, "Post created");

    Ok(HttpResponse::Created().json(post_response(&state, &saved).await?))
}

/// GET /api/posts/{id} - a single post with its comments.
pub async fn get_post(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    identity: OptionalIdentity,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    let comments = state.comments.list_for_post(post.id).await?;

    let viewer = identity.0.map(|i| i.user_id);
    let following = state
        .follow_graph()
        .is_following(viewer, post.author_id)
        .await?;

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post_response(&state, &post).await?,
        comments: comment_responses(&state, &comments).await?,
        following,
    }))
}

/// PUT /api/posts/{id} - edit a post.
///
/// A non-author is silently redirected to the canonical post view without
/// any mutation.
pub async fn edit_post(
    state: web::Data<AppState>,
    identity: Identity,
    id: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let mut post = state
        .posts
        .find_by_id(*id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", id)))?;

    if identity.user_id != post.author_id {
        return Ok(HttpResponse::SeeOther()
            .insert_header((header::LOCATION, format!("/api/posts/{}", post.id)))
            .finish());
    }

    let req = body.into_inner();

    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Enter at least one character".to_string(),
        ));
    }

    post.text = req.text;
    post.group_id = resolve_group(&state, req.group.as_deref()).await?;
    if let Some(image) = req.image.as_deref() {
        post.image_path = Some(store_image(&state, image, req.image_name.as_deref()).await?);
    }
    post.updated_at = chrono::Utc::now();

    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(post_response(&state, &saved).await?))
}
