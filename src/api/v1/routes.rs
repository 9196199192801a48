/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /registrations/inspect
 */
use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, registrations::inspect};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/registrations/inspect", post(inspect))
}
