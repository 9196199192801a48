/*
 * Responsibility
 * - GET /health (疎通用, middleware 適用の確認にも使う)
 */
use axum::Json;
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
