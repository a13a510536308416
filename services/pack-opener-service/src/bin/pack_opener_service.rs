use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use pack_opener_api::{app_routes, setup_tracing, ApiServerEnv, GlobalState};
use pack_opener_common::EnvVars;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let env = ApiServerEnv::load()?;
    let port = env.port;
    let timeout = Duration::from_secs(env.request_timeout_secs);

    let cors = CorsLayer::very_permissive();
    let trace = TraceLayer::new_for_http();

    let global_state = GlobalState::new(env);
    if global_state.is_seeded() {
        tracing::warn!("PACK_SEED is set, packs are deterministic and shared across requests");
    }

    let app = Router::new()
        .merge(app_routes())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors)
        .layer(trace)
        .with_state(global_state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("failed to bind port {port}"))?;

    tracing::info!("LISTENING ON {port}");
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited")?;
    Ok(())
}
