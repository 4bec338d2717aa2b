//! Commenting on posts.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use quill_core::domain::Comment;
use quill_shared::dto::CreateCommentRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::render::comment_responses;

/// POST /api/posts/{id}/comments - attach a comment to a post.
pub async fn add_comment(
    state: web::Data<AppState>,
    identity: Identity,
    post_id: web::Path<Uuid>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .find_by_id(*post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post {} not found", post_id)))?;

    let req = body.into_inner();
    if req.text.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Enter at least one character".to_string(),
        ));
    }

    let comment = Comment::new(post.id, identity.user_id, req.text);
    let saved = state.comments.insert(comment).await?;

    let mut rendered = comment_responses(&state, std::slice::from_ref(&saved)).await?;
    let response = rendered.remove(0);

    Ok(HttpResponse::Created().json(response))
}
