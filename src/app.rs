/*
 * Responsibility
 * - tracing / panic hook 初期化
 * - Config 読み込み → AppState 生成 → Router 組み立て
 * - Middleware の適用 (CORS / security headers / request-id, trace, limit, timeout)
 * - axum::serve() で起動
 */
use std::{panic, process};

use anyhow::Result;
use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{api, api::v1::handlers::health::health, config::Config, middleware, state::AppState};

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    // Ex:
    // RUST_LOG=info,dbsc_registration=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook(abort_on_panic: bool) {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");

        // Development: fail fast. Production: default hook, keep serving.
        if abort_on_panic {
            process::abort();
        } else {
            default_hook(info);
        }
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook(!config.app_env.is_production());

    tracing::info!(
        "starting registration inspector in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let app = build_router(&config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Full router with middleware applied. Also used by the HTTP tests.
pub fn build_router(config: &Config) -> Router {
    let state = AppState::from_config(config);

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes())
        .with_state(state);

    let router = middleware::security_headers::apply(router);
    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}
