use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    catalog::models::SearchHit,
    common::errors::ApiError,
    proxy::rewrite,
    server::AppState,
};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub count: Option<u32>,
    pub apikey: Option<String>,
}

pub async fn search_videos(
    Query(params): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(query) = params.query.filter(|q| !q.is_empty()) else {
        return ApiError::bad_request("query parameter is required", "/api/search").into_response();
    };

    let api_key = params
        .apikey
        .unwrap_or_else(|| state.config.catalog.api_key.clone());
    let count = params
        .count
        .unwrap_or(state.config.catalog.max_search_results);

    info!("GET /api/search query={:?} count={}", query, count);

    let items = state.catalog.search(&query, count, &api_key).await;

    let public = &state.config.server.public_url;
    let flags = &state.config.proxy;
    let default_quality = &state.config.resolver.default_quality;

    let mut hits = Vec::with_capacity(items.len());
    for item in items {
        let channel_thumbnail = state
            .catalog
            .channel_thumbnail(&item.channel_id, &api_key)
            .await
            .unwrap_or_default();

        hits.push(SearchHit {
            thumbnail: rewrite::image_proxy_url(
                public,
                &format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", item.video_id),
                flags.use_thumbnail_proxy,
            ),
            channel_thumbnail: rewrite::image_proxy_url(
                public,
                &channel_thumbnail,
                flags.use_channel_thumbnail_proxy,
            ),
            url: format!(
                "{}/api/video?video_id={}&quality={}",
                public.trim_end_matches('/'),
                item.video_id,
                default_quality
            ),
            title: item.title,
            author: item.author,
            video_id: item.video_id,
        });
    }

    Json(hits).into_response()
}
