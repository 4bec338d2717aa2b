//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response containing authentication tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub display_name: String,
    pub created_at: String,
}

/// A profile page: the author plus whether the viewer follows them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub author: UserResponse,
    pub following: bool,
}

/// Request to create a group (admin only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A group's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request to create a post. The image travels as base64 inside the JSON
/// body; `image_name` is the client-side file name, used only to describe
/// rejected uploads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub text: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_name: Option<String>,
}

/// Request to edit a post (author only). Same field rules as creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub text: String,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_name: Option<String>,
}

/// A post as rendered in feeds and detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub text: String,
    pub author: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<GroupResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,
    pub created_at: String,
}

/// Pagination metadata for a feed page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMeta {
    pub number: u64,
    pub pages: u64,
    pub total: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

/// One page of a feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    pub posts: Vec<PostResponse>,
    pub page: PageMeta,
}

/// A feed page scoped to a group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupFeedResponse {
    pub group: GroupResponse,
    pub posts: Vec<PostResponse>,
    pub page: PageMeta,
}

/// A feed page scoped to an author's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileFeedResponse {
    pub author: UserResponse,
    pub following: bool,
    pub posts: Vec<PostResponse>,
    pub page: PageMeta,
}

/// Request to add a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

/// A comment as rendered on a post detail page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub text: String,
    pub author: UserResponse,
    pub created_at: String,
}

/// A single post with its comments and the viewer's follow state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub following: bool,
}
