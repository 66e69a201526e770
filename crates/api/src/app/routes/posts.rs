use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use lupin_core::{Post, PostId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// `POST /add` — insert one document, return the assigned id.
pub async fn insert_post(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreatePostRequest>,
) -> axum::response::Response {
    match services.insert_post(body.into_post()).await {
        Ok(outcome) => {
            (StatusCode::OK, Json(dto::insert_outcome_to_json(outcome))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `GET /posts` — full-collection scan, empty array when there are none.
pub async fn list_posts(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.list_posts().await {
        Ok(posts) => (StatusCode::OK, Json(posts)).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `GET /:id` — single-document lookup.
pub async fn get_post(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: PostId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid post id")
        }
    };

    match services.get_post(id).await {
        Ok(Some(post)) => (StatusCode::OK, Json(post)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "post not found"),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `DELETE /:id` — deleting an absent id succeeds with a zero count.
pub async fn delete_post(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: PostId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid post id")
        }
    };

    match services.delete_post(id).await {
        Ok(outcome) => {
            (StatusCode::OK, Json(dto::delete_outcome_to_json(outcome))).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}

/// `PUT /update` — applies `title` only and echoes the request post back,
/// not the post-update document state.
pub async fn update_post(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::UpdatePostRequest>,
) -> axum::response::Response {
    let id = match body.id.as_deref() {
        Some(raw) => match raw.parse::<PostId>() {
            Ok(v) => v,
            Err(_) => {
                return errors::json_error(
                    StatusCode::BAD_REQUEST,
                    "invalid_id",
                    "invalid post id",
                )
            }
        },
        None => {
            return errors::json_error(StatusCode::BAD_REQUEST, "missing_id", "_id is required")
        }
    };

    match services.update_post_title(id, body.title.clone()).await {
        Ok(outcome) => {
            if outcome.matched_count == 0 {
                tracing::debug!(%id, "update matched no document");
            }
            let echoed = Post {
                id: Some(id),
                title: body.title,
                body: body.body,
            };
            (StatusCode::OK, Json(echoed)).into_response()
        }
        Err(e) => errors::store_error_to_response(e),
    }
}
