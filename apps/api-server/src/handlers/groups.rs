//! Group administration.

use actix_web::{HttpResponse, web};

use quill_core::domain::Group;
use quill_shared::dto::CreateGroupRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

use super::render::group_response;

/// POST /api/groups - create a group. Requires the admin role.
pub async fn create_group(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateGroupRequest>,
) -> AppResult<HttpResponse> {
    if !identity.has_role("admin") {
        return Err(AppError::Forbidden);
    }

    let req = body.into_inner();

    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if req.slug.is_empty()
        || !req
            .slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AppError::BadRequest(
            "Slug must contain only lowercase letters, digits and hyphens".to_string(),
        ));
    }

    if state.groups.find_by_slug(&req.slug).await?.is_some() {
        return Err(AppError::Conflict(format!(
            "Group with slug '{}' already exists",
            req.slug
        )));
    }

    let group = Group::new(req.title, req.slug, req.description);
    let saved = state.groups.insert(group).await?;

    tracing::info!(slug = %saved.slug, admin = %identity.username, "Group created");

    Ok(HttpResponse::Created().json(group_response(&saved)))
}
