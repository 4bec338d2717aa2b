//! Response assembly - turns domain entities into API DTOs.

use quill_core::domain::{Comment, Group, Post, User};
use quill_core::feed::FeedPage;
use quill_shared::dto::{CommentResponse, GroupResponse, PageMeta, PostResponse, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn user_response(user: &User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        username: user.username.clone(),
        display_name: user.display_name.clone(),
        created_at: user.created_at.to_rfc3339(),
    }
}

pub(crate) fn group_response(group: &Group) -> GroupResponse {
    GroupResponse {
        id: group.id.to_string(),
        title: group.title.clone(),
        slug: group.slug.clone(),
        description: group.description.clone(),
    }
}

pub(crate) fn page_meta(page: &FeedPage) -> PageMeta {
    PageMeta {
        number: page.number,
        pages: page.pages,
        total: page.total,
        has_next: page.has_next,
        has_previous: page.has_previous,
    }
}

/// Resolve a post's author and group and build its DTO.
pub(crate) async fn post_response(state: &AppState, post: &Post) -> AppResult<PostResponse> {
    let author = state
        .users
        .find_by_id(post.author_id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Author missing for post {}", post.id)))?;

    let group = match post.group_id {
        Some(group_id) => state.groups.find_by_id(group_id).await?,
        None => None,
    };

    Ok(PostResponse {
        id: post.id.to_string(),
        text: post.text.clone(),
        author: user_response(&author),
        group: group.as_ref().map(group_response),
        image_path: post.image_path.clone(),
        created_at: post.created_at.to_rfc3339(),
    })
}

pub(crate) async fn post_responses(
    state: &AppState,
    posts: &[Post],
) -> AppResult<Vec<PostResponse>> {
    let mut rendered = Vec::with_capacity(posts.len());
    for post in posts {
        rendered.push(post_response(state, post).await?);
    }
    Ok(rendered)
}

pub(crate) async fn comment_responses(
    state: &AppState,
    comments: &[Comment],
) -> AppResult<Vec<CommentResponse>> {
    let mut rendered = Vec::with_capacity(comments.len());
    for comment in comments {
        let author = state
            .users
            .find_by_id(comment.author_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Author missing for comment {}", comment.id))
            })?;

        rendered.push(CommentResponse {
            id: comment.id.to_string(),
            text: comment.text.clone(),
            author: user_response(&author),
            created_at: comment.created_at.to_rfc3339(),
        });
    }
    Ok(rendered)
}
