use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::{proxy, server::AppState};

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub url: Option<String>,
}

pub async fn proxy_video(
    Query(params): Query<ProxyQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "url parameter is required").into_response();
    };

    info!(
        "GET /proxy/video url={} range={:?}",
        url,
        headers.get(axum::http::header::RANGE)
    );
    proxy::video::stream(&state.streaming, &url, &headers).await
}

pub async fn proxy_image(
    Query(params): Query<ProxyQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(url) = params.url.filter(|u| !u.is_empty()) else {
        return (StatusCode::BAD_REQUEST, "url parameter is required").into_response();
    };

    proxy::image::relay(&state.streaming, &url).await
}
