//! HTTP handlers and route configuration.

mod auth;
mod comments;
mod feeds;
mod groups;
mod health;
mod posts;
mod profiles;
mod render;

#[cfg(test)]
mod tests;

use actix_web::{HttpResponse, web};
use quill_shared::ErrorResponse;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Auth routes
            .service(
                web::scope("/auth")
                    .route("/register", web::post().to(auth::register))
                    .route("/login", web::post().to(auth::login))
                    .route("/me", web::get().to(auth::me)),
            )
            // Posts and feeds
            .route("/posts", web::get().to(feeds::index))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}", web::put().to(posts::edit_post))
            .route("/posts/{id}/comments", web::post().to(comments::add_comment))
            // Groups
            .route("/groups", web::post().to(groups::create_group))
            .route("/groups/{slug}/posts", web::get().to(feeds::group_feed))
            // Profiles and the follow graph
            .route("/users/{username}", web::get().to(profiles::profile))
            .route("/users/{username}/posts", web::get().to(profiles::profile_feed))
            .route(
                "/users/{username}/follow",
                web::get().to(profiles::profile_follow),
            )
            .route(
                "/users/{username}/unfollow",
                web::get().to(profiles::profile_unfollow),
            )
            // Followed-authors feed
            .route("/feed", web::get().to(feeds::follow_feed)),
    );
}

/// Fallback for unmatched routes - the 404 page.
pub async fn not_found(req: actix_web::HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(
        ErrorResponse::new(404, "Not Found").with_detail(format!("No route for {}", req.path())),
    )
}
