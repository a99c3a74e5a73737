/*
 * Responsibility
 * - GET / (疎通確認用)
 * - hostname と現在時刻をリクエストごとに取り直す
 */
use axum::{Json, extract::State};
use chrono::Utc;

use crate::{api::dto::status::StatusPayload, error::AppError, state::AppState};

pub async fn status(State(state): State<AppState>) -> Result<Json<StatusPayload>, AppError> {
    let hostname = state.hostname.hostname().inspect_err(|err| {
        tracing::warn!(error = %err, "hostname resolution failed");
    })?;

    Ok(Json(StatusPayload::new(hostname, Utc::now())))
}
