//! Endpoint tests over the in-memory application state.

use std::sync::Arc;
use std::time::Duration;

use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use base64::Engine as _;
use chrono::{TimeDelta, Utc};
use serde_json::json;

use quill_core::domain::{Group, Post, User};
use quill_core::ports::{PasswordService, TokenService};
use quill_infra::auth::{Argon2PasswordService, JwtConfig, JwtTokenService};
use quill_shared::ErrorResponse;
use quill_shared::dto::{
    AuthResponse, CommentResponse, FeedResponse, GroupFeedResponse, GroupResponse,
    PostDetailResponse, PostResponse, ProfileFeedResponse, ProfileResponse, UserResponse,
};

use crate::state::AppState;

// Smallest valid GIF89a.
const SMALL_GIF: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x21, 0xf9,
    0x04, 0x01, 0x0a, 0x00, 0x01, 0x00, 0x2c, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x01, 0x00,
    0x00, 0x02, 0x02, 0x4c, 0x01, 0x00, 0x3b,
];

struct TestContext {
    state: AppState,
    tokens: Arc<dyn TokenService>,
    passwords: Arc<dyn PasswordService>,
}

impl TestContext {
    fn new() -> Self {
        Self::with_cache_ttl(None)
    }

    fn with_cache_ttl(feed_cache_ttl: Option<Duration>) -> Self {
        let media_root = std::env::temp_dir().join(format!("quill-test-{}", uuid::Uuid::new_v4()));
        Self {
            state: AppState::in_memory(feed_cache_ttl, &media_root.to_string_lossy()),
            tokens: Arc::new(JwtTokenService::new(JwtConfig {
                secret: "test-secret-key".to_string(),
                expiration_hours: 1,
                issuer: "test-issuer".to_string(),
            })),
            passwords: Arc::new(Argon2PasswordService::new()),
        }
    }

    async fn seed_user_with_roles(&self, username: &str, roles: &[&str]) -> (User, String) {
        let hash = self.passwords.hash("A12345a!").unwrap();
        let user = User::new(
            username.to_string(),
            username.to_string(),
            format!("{username}@example.com"),
            hash,
        );
        let saved = self.state.users.insert(user).await.unwrap();
        let token = self
            .tokens
            .generate_token(
                saved.id,
                username,
                roles.iter().map(|r| r.to_string()).collect(),
            )
            .unwrap();
        (saved, token)
    }

    async fn seed_user(&self, username: &str) -> (User, String) {
        self.seed_user_with_roles(username, &["user"]).await
    }

    async fn seed_group(&self, title: &str, slug: &str) -> Group {
        let group = Group::new(title.to_string(), slug.to_string(), None);
        self.state.groups.insert(group).await.unwrap()
    }

    async fn seed_post(&self, author: &User, text: &str, group: Option<&Group>) -> Post {
        let post = Post::new(author.id, text.to_string(), group.map(|g| g.id), None);
        self.state.posts.insert(post).await.unwrap()
    }
}

macro_rules! init_app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($ctx.state.clone()))
                .app_data(web::Data::new($ctx.tokens.clone()))
                .app_data(web::Data::new($ctx.passwords.clone()))
                .configure(super::configure_routes)
                .default_service(web::route().to(super::not_found)),
        )
        .await
    };
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {token}"))
}

#[actix_rt::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health").to_request())
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_register_login_me_roundtrip() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "jerry",
            "display_name": "Jerry",
            "email": "jerry@example.com",
            "password": "A12345a!pass",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "jerry", "password": "A12345a!pass"}))
        .to_request();
    let auth: AuthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(auth.token_type, "Bearer");

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&auth.access_token))
        .to_request();
    let me: UserResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me.username, "jerry");
}

#[actix_rt::test]
async fn test_register_rejects_bad_input() {
    let ctx = TestContext::new();
    ctx.seed_user("jerry").await;
    let app = init_app!(ctx);

    let cases = [
        (json!({"username": "has space", "display_name": "x", "email": "a@b.c", "password": "A12345a!pass"}), StatusCode::BAD_REQUEST),
        (json!({"username": "tom", "display_name": "x", "email": "not-an-email", "password": "A12345a!pass"}), StatusCode::BAD_REQUEST),
        (json!({"username": "tom", "display_name": "x", "email": "a@b.c", "password": "short"}), StatusCode::BAD_REQUEST),
        (json!({"username": "jerry", "display_name": "x", "email": "other@b.c", "password": "A12345a!pass"}), StatusCode::CONFLICT),
        (json!({"username": "tom", "display_name": "x", "email": "jerry@example.com", "password": "A12345a!pass"}), StatusCode::CONFLICT),
    ];

    for (body, expected) in cases {
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), expected, "body: {body}");
    }
}

#[actix_rt::test]
async fn test_login_with_wrong_password_is_unauthorized() {
    let ctx = TestContext::new();
    ctx.seed_user("jerry").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "jerry", "password": "wrong_password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_create_post_requires_auth() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .set_json(json!({"text": "Lets go!"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let feed: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(feed.page.total, 0);
}

#[actix_rt::test]
async fn test_created_post_appears_in_all_feeds() {
    let ctx = TestContext::new();
    let (_, token) = ctx.seed_user("jerry").await;
    ctx.seed_group("Cats", "cats").await;
    ctx.seed_group("Dogs", "dogs").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"text": "Lets go!", "group": "cats"}))
        .to_request();
    let created: PostResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.text, "Lets go!");
    assert_eq!(created.author.username, "jerry");

    let index: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(index.posts.len(), 1);
    assert_eq!(index.posts[0].text, "Lets go!");

    let cats: GroupFeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/groups/cats/posts")
            .to_request(),
    )
    .await;
    assert_eq!(cats.posts.len(), 1);

    let dogs: GroupFeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/groups/dogs/posts")
            .to_request(),
    )
    .await;
    assert!(dogs.posts.is_empty());

    let profile: ProfileFeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/users/jerry/posts")
            .to_request(),
    )
    .await;
    assert_eq!(profile.posts.len(), 1);
    assert_eq!(profile.author.username, "jerry");
}

#[actix_rt::test]
async fn test_create_post_rejects_empty_text_and_unknown_group() {
    let ctx = TestContext::new();
    let (_, token) = ctx.seed_user("jerry").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"text": "   "}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"text": "Lets go!", "group": "no-such-group"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_rt::test]
async fn test_non_image_upload_is_rejected_naming_format() {
    let ctx = TestContext::new();
    let (_, token) = ctx.seed_user("jerry").await;
    let app = init_app!(ctx);

    let encoded = base64::engine::general_purpose::STANDARD.encode(b"just some text");
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"text": "Lets go!", "image": encoded, "image_name": "small.txt"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: ErrorResponse = test::read_body_json(resp).await;
    let detail = err.detail.unwrap_or_default();
    assert!(detail.contains("'txt'"), "got: {detail}");
    assert!(detail.contains("bmp, gif, ico, jpeg, png, tiff, webp"));

    // Nothing was published.
    let feed: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(feed.page.total, 0);
}

#[actix_rt::test]
async fn test_gif_upload_is_stored() {
    let ctx = TestContext::new();
    let (_, token) = ctx.seed_user("jerry").await;
    let app = init_app!(ctx);

    let encoded = base64::engine::general_purpose::STANDARD.encode(SMALL_GIF);
    let req = test::TestRequest::post()
        .uri("/api/posts")
        .insert_header(bearer(&token))
        .set_json(json!({"text": "Lets go!", "image": encoded, "image_name": "small.gif"}))
        .to_request();
    let created: PostResponse = test::call_and_read_body_json(&app, req).await;

    let image_path = created.image_path.expect("image path");
    assert!(image_path.ends_with(".gif"), "got: {image_path}");
}

#[actix_rt::test]
async fn test_non_author_edit_redirects_without_mutation() {
    let ctx = TestContext::new();
    let (jerry, _) = ctx.seed_user("jerry").await;
    let (_, tom_token) = ctx.seed_user("tom").await;
    let post = ctx.seed_post(&jerry, "Lets go!", None).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&tom_token))
        .set_json(json!({"text": "hijacked"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers().get(header::LOCATION).unwrap();
    assert_eq!(location, &format!("/api/posts/{}", post.id));

    let detail: PostDetailResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(detail.post.text, "Lets go!");
}

#[actix_rt::test]
async fn test_author_can_edit_own_post() {
    let ctx = TestContext::new();
    let (jerry, token) = ctx.seed_user("jerry").await;
    let post = ctx.seed_post(&jerry, "Lets go!", None).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::put()
        .uri(&format!("/api/posts/{}", post.id))
        .insert_header(bearer(&token))
        .set_json(json!({"text": "Lets go again!"}))
        .to_request();
    let updated: PostResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(updated.text, "Lets go again!");
}

#[actix_rt::test]
async fn test_comments_require_auth_and_appear_on_detail() {
    let ctx = TestContext::new();
    let (jerry, _) = ctx.seed_user("jerry").await;
    let (_, tom_token) = ctx.seed_user("tom").await;
    let post = ctx.seed_post(&jerry, "Lets go!", None).await;
    let app = init_app!(ctx);

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comments", post.id))
        .set_json(json!({"text": "nice"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::UNAUTHORIZED
    );

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comments", post.id))
        .insert_header(bearer(&tom_token))
        .set_json(json!({"text": "  "}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri(&format!("/api/posts/{}/comments", post.id))
        .insert_header(bearer(&tom_token))
        .set_json(json!({"text": "nice"}))
        .to_request();
    let comment: CommentResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(comment.author.username, "tom");

    let detail: PostDetailResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{}", post.id))
            .to_request(),
    )
    .await;
    assert_eq!(detail.comments.len(), 1);
    assert_eq!(detail.comments[0].text, "nice");
}

#[actix_rt::test]
async fn test_follow_is_idempotent_and_reversible() {
    let ctx = TestContext::new();
    let (jerry, _) = ctx.seed_user("jerry").await;
    let (_, tom_token) = ctx.seed_user("tom").await;
    ctx.seed_post(&jerry, "Lets go!", None).await;
    let app = init_app!(ctx);

    // Follow twice; both redirect back to the profile.
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/users/jerry/follow")
            .insert_header(bearer(&tom_token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/api/users/jerry"
        );
    }

    let profile: ProfileResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/users/jerry")
            .insert_header(bearer(&tom_token))
            .to_request(),
    )
    .await;
    assert!(profile.following);

    let feed: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/feed")
            .insert_header(bearer(&tom_token))
            .to_request(),
    )
    .await;
    assert_eq!(feed.posts.len(), 1);
    assert_eq!(feed.page.total, 1);

    let req = test::TestRequest::get()
        .uri("/api/users/jerry/unfollow")
        .insert_header(bearer(&tom_token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::SEE_OTHER
    );

    let profile: ProfileResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/users/jerry")
            .insert_header(bearer(&tom_token))
            .to_request(),
    )
    .await;
    assert!(!profile.following);
}

#[actix_rt::test]
async fn test_self_follow_is_ignored() {
    let ctx = TestContext::new();
    let (_, token) = ctx.seed_user("jerry").await;
    let app = init_app!(ctx);

    let req = test::TestRequest::get()
        .uri("/api/users/jerry/follow")
        .insert_header(bearer(&token))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::SEE_OTHER
    );

    let profile: ProfileResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/users/jerry")
            .insert_header(bearer(&token))
            .to_request(),
    )
    .await;
    assert!(!profile.following);
}

#[actix_rt::test]
async fn test_follow_feed_empty_for_non_follower() {
    let ctx = TestContext::new();
    let (jerry, _) = ctx.seed_user("jerry").await;
    let (_, rex_token) = ctx.seed_user("rex").await;
    ctx.seed_post(&jerry, "Lets go!", None).await;
    let app = init_app!(ctx);

    let feed: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/feed")
            .insert_header(bearer(&rex_token))
            .to_request(),
    )
    .await;

    assert!(feed.posts.is_empty());
    assert_eq!(feed.page.total, 0);
    assert_eq!(feed.page.number, 1);
}

#[actix_rt::test]
async fn test_follow_feed_requires_auth() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/feed").to_request())
        .await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_feed_orders_newest_first() {
    let ctx = TestContext::new();
    let (jerry, _) = ctx.seed_user("jerry").await;

    let mut old = Post::new(jerry.id, "old".to_string(), None, None);
    old.created_at = Utc::now() - TimeDelta::minutes(5);
    ctx.state.posts.insert(old).await.unwrap();
    ctx.seed_post(&jerry, "new", None).await;

    let app = init_app!(ctx);

    let feed: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;

    assert_eq!(feed.posts[0].text, "new");
    assert_eq!(feed.posts[1].text, "old");
}

#[actix_rt::test]
async fn test_out_of_range_page_clamps() {
    let ctx = TestContext::new();
    let (jerry, _) = ctx.seed_user("jerry").await;
    for i in 0..11 {
        ctx.seed_post(&jerry, &format!("post {i}"), None).await;
    }
    let app = init_app!(ctx);

    let first: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(first.posts.len(), 10);
    assert_eq!(first.page.number, 1);
    assert_eq!(first.page.pages, 2);
    assert!(first.page.has_next);

    let clamped: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/api/posts?page=999")
            .to_request(),
    )
    .await;
    assert_eq!(clamped.page.number, 2);
    assert_eq!(clamped.posts.len(), 1);
    assert!(clamped.page.has_previous);
}

#[actix_rt::test]
async fn test_index_cache_serves_stale_page_until_deleted() {
    let ctx = TestContext::with_cache_ttl(Some(Duration::from_secs(60)));
    let (jerry, _) = ctx.seed_user("jerry").await;
    ctx.seed_post(&jerry, "first", None).await;
    let app = init_app!(ctx);

    let warm: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(warm.page.total, 1);

    ctx.seed_post(&jerry, "second", None).await;

    let stale: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(stale.page.total, 1, "cached page must not see the new post");

    ctx.state.cache.delete("feed:index:1").await.unwrap();

    let fresh: FeedResponse = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api/posts").to_request(),
    )
    .await;
    assert_eq!(fresh.page.total, 2);
}

#[actix_rt::test]
async fn test_cache_only_stores_pages_that_exist() {
    let ctx = TestContext::with_cache_ttl(Some(Duration::from_secs(60)));
    let (jerry, _) = ctx.seed_user("jerry").await;
    ctx.seed_post(&jerry, "Lets go!", None).await;

    let app = init_app!(ctx);

    // A single post means one feed page; out-of-range requests clamp to it
    // and must not mint cache entries of their own.
    for page in [2u64, 50, 10_000, 9_999_999] {
        let resp = test::call_service(
            &app,
            test::TestRequest::get()
                .uri(&format!("/api/posts?page={page}"))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(
            !ctx.state.cache.exists(&format!("feed:index:{page}")).await,
            "page {page} must not be cached"
        );
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/posts").to_request())
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(ctx.state.cache.exists("feed:index:1").await);
}

#[actix_rt::test]
async fn test_group_creation_requires_admin_role() {
    let ctx = TestContext::new();
    let (_, user_token) = ctx.seed_user("tom").await;
    let (_, admin_token) = ctx.seed_user_with_roles("boss", &["user", "admin"]).await;
    let app = init_app!(ctx);

    let body = json!({"title": "Cats", "slug": "cats"});

    let req = test::TestRequest::post()
        .uri("/api/groups")
        .insert_header(bearer(&user_token))
        .set_json(&body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::FORBIDDEN
    );

    let req = test::TestRequest::post()
        .uri("/api/groups")
        .insert_header(bearer(&admin_token))
        .set_json(&body)
        .to_request();
    let created: GroupResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(created.slug, "cats");

    // Duplicate slug conflicts, malformed slug is rejected.
    let req = test::TestRequest::post()
        .uri("/api/groups")
        .insert_header(bearer(&admin_token))
        .set_json(&body)
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::CONFLICT
    );

    let req = test::TestRequest::post()
        .uri("/api/groups")
        .insert_header(bearer(&admin_token))
        .set_json(json!({"title": "Bad", "slug": "Bad Slug"}))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );
}

#[actix_rt::test]
async fn test_unknown_routes_fall_back_to_404() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    for uri in ["/api/news", "/nothing/here"] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri: {uri}");

        let err: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(err.status, 404);
    }
}

#[actix_rt::test]
async fn test_unknown_group_and_user_are_404() {
    let ctx = TestContext::new();
    let app = init_app!(ctx);

    for uri in [
        "/api/groups/no-such/posts",
        "/api/users/nobody",
        "/api/users/nobody/posts",
    ] {
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "uri: {uri}");
    }
}
