use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::{json, Value};

use pack_opener_common::{env_flag, EnvVars};

use crate::GlobalState;

pub fn misc_routes() -> Router<GlobalState> {
    Router::new()
        .route("/",
            get(|| async { Json(json!({ "message": "TCG Pack Opener Backend Ready" })) })
        )
        .route("/api/hello",
            get(|| async { Json(json!({ "message": "Hello from the backend API!" })) })
        )
        .route("/health",
            get(|| async { "OK" })
        )
        .route("/test",
            get(service_status)
        )
}

#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub backend: &'static str,
    pub database: &'static str,
    pub database_url: &'static str,
    pub database_name: &'static str,
    pub connection_status: &'static str,
    pub collections: Vec<Value>,
}

// No database client is linked, so only the configuration is reported.
async fn service_status(
    State(state): State<GlobalState>,
) -> Json<ServiceStatus> {
    let env = &state.env;
    Json(ServiceStatus {
        backend: "✅ Running",
        database: "❌ Not Available",
        database_url: env_flag(env.get_env_var("DATABASE_URL").is_some()),
        database_name: env_flag(env.get_env_var("DATABASE_NAME").is_some()),
        connection_status: "Not Connected",
        collections: Vec::new(),
    })
}
