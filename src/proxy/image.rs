use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use reqwest::Client;
use tracing::warn;

/// Relays a thumbnail image. Images are small, so unlike the media relay
/// the whole body is fetched before answering.
pub async fn relay(client: &Client, url: &str) -> Response {
    let parsed = match reqwest::Url::parse(url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => u,
        _ => return (StatusCode::BAD_REQUEST, "Invalid URL").into_response(),
    };

    let bytes = match client.get(parsed).send().await {
        Ok(response) => match response.bytes().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Image body read failed for {}: {}", url, e);
                return (StatusCode::BAD_GATEWAY, "upstream read failed").into_response();
            }
        },
        Err(e) => {
            warn!("Image upstream request failed for {}: {}", url, e);
            return (StatusCode::BAD_GATEWAY, "upstream request failed").into_response();
        }
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("image/jpeg"));
    (StatusCode::OK, headers, bytes).into_response()
}
