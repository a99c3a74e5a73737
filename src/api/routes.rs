/*
 * Responsibility
 * - URL 構造を定義 (GET / のみ)
 * - それ以外は fallback で 404 / 405 を返す
 */
use axum::{Router, routing::get};

use crate::api::handlers::{
    fallback::{method_not_allowed, not_found},
    status::status,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status))
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
}
