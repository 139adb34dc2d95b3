use axum::body::Body;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use futures::TryStreamExt;
use reqwest::Client;
use tracing::{debug, warn};

/// Relays a resolved media URL to the client as a byte stream.
///
/// The inbound `Range` header is forwarded verbatim; the upstream origin is
/// the sole judge of range satisfiability. The response always advertises
/// `Accept-Ranges: bytes` so players keep seeking even when a particular
/// mirror ignored the range. Bytes are piped as they arrive; the body is
/// never buffered. A mid-stream upstream failure simply terminates the
/// client stream.
pub async fn stream(client: &Client, url: &str, inbound: &HeaderMap) -> Response {
    let parsed = match reqwest::Url::parse(url) {
        Ok(u) if matches!(u.scheme(), "http" | "https") => u,
        _ => {
            return (StatusCode::BAD_REQUEST, "url parameter is not a valid URL").into_response();
        }
    };

    let mut request = client.get(parsed);
    if let Some(range) = inbound.get(header::RANGE) {
        debug!("Forwarding range {:?} for {}", range, url);
        request = request.header(header::RANGE, range.clone());
    }

    let upstream = match request.send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("Media upstream request failed for {}: {}", url, e);
            return (StatusCode::BAD_GATEWAY, "upstream request failed").into_response();
        }
    };

    let status = upstream.status();
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, header::HeaderValue::from_static("video/mp4"));
    headers.insert(header::ACCEPT_RANGES, header::HeaderValue::from_static("bytes"));

    if let Some(v) = upstream.headers().get(header::CONTENT_LENGTH) {
        headers.insert(header::CONTENT_LENGTH, v.clone());
    }
    if let Some(v) = upstream.headers().get(header::CONTENT_RANGE) {
        headers.insert(header::CONTENT_RANGE, v.clone());
    }

    // A drop mid-transfer terminates the client stream; there is no retry,
    // since that would need re-issuing with an updated byte offset.
    let body_url = url.to_string();
    let body = upstream
        .bytes_stream()
        .inspect_err(move |e| warn!("Media upstream dropped for {}: {}", body_url, e));

    (status, headers, Body::from_stream(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::http::HttpClient;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Stub origin holding 2000 bytes; honors a `Range: bytes=N-` request
    /// with a 206 starting at N.
    async fn spawn_ranged_origin() -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let body: Vec<u8> = (0..2000u32).map(|i| (i % 251) as u8).collect();
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = vec![0u8; 2048];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();

                let start = request
                    .lines()
                    .find(|l| l.to_ascii_lowercase().starts_with("range: bytes="))
                    .and_then(|l| l.split('=').nth(1))
                    .and_then(|r| r.trim_end_matches('-').trim().parse::<usize>().ok());

                let (head, slice) = match start {
                    Some(s) => (
                        format!(
                            "HTTP/1.1 206 Partial Content\r\ncontent-length: {}\r\ncontent-range: bytes {}-1999/2000\r\n\r\n",
                            body.len() - s,
                            s
                        ),
                        &body[s..],
                    ),
                    None => (
                        format!("HTTP/1.1 200 OK\r\ncontent-length: {}\r\n\r\n", body.len()),
                        &body[..],
                    ),
                };

                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(slice).await;
                let _ = socket.shutdown().await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn malformed_url_is_rejected_before_any_network_call() {
        let client = HttpClient::streaming().unwrap();
        let response = stream(&client, "not-a-url", &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn forwards_range_and_streams_from_the_offset() {
        let addr = spawn_ranged_origin().await;
        let client = HttpClient::streaming().unwrap();

        let mut inbound = HeaderMap::new();
        inbound.insert(header::RANGE, header::HeaderValue::from_static("bytes=1000-"));

        let response = stream(&client, &format!("http://{}/v.mp4", addr), &inbound).await;
        assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
        assert_eq!(
            response.headers().get(header::ACCEPT_RANGES).unwrap(),
            "bytes"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "video/mp4"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_RANGE).unwrap(),
            "bytes 1000-1999/2000"
        );

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.len(), 1000);
        // First relayed byte is byte 1000 of the origin's body.
        assert_eq!(bytes[0], (1000u32 % 251) as u8);
    }

    #[tokio::test]
    async fn full_body_when_no_range_given() {
        let addr = spawn_ranged_origin().await;
        let client = HttpClient::streaming().unwrap();

        let response = stream(&client, &format!("http://{}/v.mp4", addr), &HeaderMap::new()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.len(), 2000);
    }
}
