use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    server::AppState,
    transport::{
        middleware::add_response_headers,
        routes::{proxy, search, version, video},
    },
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/video", get(video::get_video_info))
        .route("/api/video/url", get(video::get_video_url))
        .route("/api/search", get(search::search_videos))
        .route("/proxy/video", get(proxy::proxy_video))
        .route("/proxy/image", get(proxy::proxy_image))
        .route("/version", get(version::get_version))
        .layer(middleware::from_fn(add_response_headers))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
