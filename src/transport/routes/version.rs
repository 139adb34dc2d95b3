use axum::{Json, response::IntoResponse};

pub async fn get_version() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "commit": env!("GIT_COMMIT"),
        "buildTime": env!("BUILD_TIME"),
    }))
}
