use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use crate::{
    catalog::models::VideoInfoResponse,
    common::errors::ApiError,
    common::types::{QualityTier, VideoId},
    proxy::rewrite,
    server::AppState,
};

#[derive(Debug, Deserialize)]
pub struct VideoQuery {
    pub video_id: Option<String>,
    pub quality: Option<String>,
    pub apikey: Option<String>,
}

fn default_tier(state: &AppState) -> QualityTier {
    QualityTier::parse(&state.config.resolver.default_quality).unwrap_or(QualityTier::Q360)
}

fn requested_tier(state: &AppState, quality: Option<&str>) -> QualityTier {
    QualityTier::from_param(
        quality.unwrap_or(""),
        &state.config.resolver.qualities,
        default_tier(state),
    )
}

/// Full metadata plus a playable URL for one video. Resolution exhaustion
/// is not an error: the response simply carries `video_url: null`.
pub async fn get_video_info(
    Query(params): Query<VideoQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(video_id) = params.video_id.filter(|id| !id.is_empty()).map(VideoId) else {
        return ApiError::bad_request("video_id parameter is required", "/api/video")
            .into_response();
    };

    let api_key = params
        .apikey
        .unwrap_or_else(|| state.config.catalog.api_key.clone());
    let quality = requested_tier(&state, params.quality.as_deref());

    info!("GET /api/video video_id={} quality={}", video_id, quality);

    let Some(metadata) = state.catalog.video_metadata(&video_id, &api_key).await else {
        return ApiError::not_found(
            format!("No catalog record for video '{}'", video_id),
            "/api/video",
        )
        .into_response();
    };

    let channel_thumbnail = state
        .catalog
        .channel_thumbnail(&metadata.channel_id, &api_key)
        .await
        .unwrap_or_default();

    let comments = state
        .catalog
        .comments(&video_id, &api_key, state.config.catalog.max_comments)
        .await;

    let video_url = state.resolver.resolve(&video_id, quality).await;

    let public = &state.config.server.public_url;
    let flags = &state.config.proxy;

    let response = VideoInfoResponse {
        title: metadata.title,
        author: metadata.author,
        description: metadata.description,
        video_id: video_id.to_string(),
        embed_url: format!("https://www.youtube.com/embed/{}", video_id),
        duration: metadata.duration,
        published_at: metadata.published_at,
        likes: metadata.likes,
        views: metadata.views,
        comment_count: metadata.comment_count,
        comments,
        channel_thumbnail: rewrite::image_proxy_url(
            public,
            &channel_thumbnail,
            flags.use_channel_thumbnail_proxy,
        ),
        thumbnail: rewrite::image_proxy_url(
            public,
            &format!("https://i.ytimg.com/vi/{}/mqdefault.jpg", video_id),
            flags.use_thumbnail_proxy,
        ),
        video_url: video_url
            .map(|url| rewrite::video_proxy_url(public, &url, flags.use_video_proxy)),
    };

    Json(response).into_response()
}

/// Resolver-only endpoint: no metadata round trip, just the strategy chain.
pub async fn get_video_url(
    Query(params): Query<VideoQuery>,
    State(state): State<Arc<AppState>>,
) -> Response {
    let Some(video_id) = params.video_id.filter(|id| !id.is_empty()).map(VideoId) else {
        return ApiError::bad_request("video_id parameter is required", "/api/video/url")
            .into_response();
    };

    let quality = requested_tier(&state, params.quality.as_deref());
    info!("GET /api/video/url video_id={} quality={}", video_id, quality);

    let video_url = state
        .resolver
        .resolve(&video_id, quality)
        .await
        .map(|url| {
            rewrite::video_proxy_url(
                &state.config.server.public_url,
                &url,
                state.config.proxy.use_video_proxy,
            )
        });

    Json(serde_json::json!({ "video_url": video_url })).into_response()
}
