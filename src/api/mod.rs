/*
 * Responsibility
 * - api の公開インターフェース (routes() の re-export など)
 */
pub mod dto;
pub mod handlers;
mod routes;

pub use routes::routes;
