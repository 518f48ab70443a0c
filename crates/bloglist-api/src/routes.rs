use axum::{Router, routing::get};

use crate::state::AppState;
use crate::{blogs, users};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/blogs", get(blogs::list_blogs).post(blogs::create_blog))
        .route("/api/blogs/summary", get(blogs::blog_summary))
        .route(
            "/api/blogs/{id}",
            get(blogs::get_blog)
                .put(blogs::update_blog)
                .delete(blogs::delete_blog),
        )
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/health", get(health))
        .with_state(state)
}

pub async fn health() -> &'static str {
    "ok"
}
