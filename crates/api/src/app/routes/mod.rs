use axum::routing::{get, post, put};
use axum::Router;

pub mod posts;
pub mod system;

/// The five post routes plus the liveness probe.
///
/// `/posts`, `/add`, `/update` and `/health` are static and win over the
/// `/:id` capture.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/posts", get(posts::list_posts))
        .route("/add", post(posts::insert_post))
        .route("/update", put(posts::update_post))
        .route("/:id", get(posts::get_post).delete(posts::delete_post))
}
