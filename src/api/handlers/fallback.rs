/*
 * Responsibility
 * - ルート外のパス (404) と許可されていないメソッド (405) を明示的に返す
 */
use axum::http::{Method, Uri};

use crate::error::AppError;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(uri.path())
}

pub async fn method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(method.as_str())
}
