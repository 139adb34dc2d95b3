use std::time::Duration;

use reqwest::Client;
use tracing::{debug, trace};

use crate::common::http::HttpClient;
use crate::resolve::strategy::ResolveError;

/// Follows a candidate URL through its redirect chain and reports where it
/// lands. Mirrors answer slowly or not at all, so every call runs under a
/// caller-supplied deadline; the redirect hop limit and the relaxed TLS
/// validation live in [`HttpClient::probe`].
#[derive(Clone)]
pub struct RedirectResolver {
    client: Client,
}

/// Connect timeout for mirror origins, kept well under the smallest
/// resolution budget so a dead mirror fails during connect instead of
/// eating the whole window.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

impl RedirectResolver {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: HttpClient::probe(CONNECT_TIMEOUT)?,
        })
    }

    /// Returns the final effective URL after redirects. The HTTP status of
    /// the final response is deliberately not inspected: legacy mirrors
    /// answer all sorts of statuses for URLs that still play, so only
    /// transport errors and the deadline count as failure.
    pub async fn resolve_final(&self, url: &str, total: Duration) -> Result<String, ResolveError> {
        trace!("Following redirects for {} (budget {:?})", url, total);

        let response = tokio::time::timeout(total, self.client.get(url).send())
            .await
            .map_err(|_| ResolveError::Timeout)?
            .map_err(|e| {
                if e.is_timeout() {
                    ResolveError::Timeout
                } else {
                    ResolveError::Transport(e)
                }
            })?;

        let final_url = response.url().to_string();
        debug!("Redirect chain resolved: {} -> {}", url, final_url);
        Ok(final_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// One-shot HTTP stub: answers the first request with `head` and hangs
    /// up. Returns the bound address.
    async fn spawn_stub(head: &'static str) -> std::net::SocketAddr {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });
        addr
    }

    #[tokio::test]
    async fn follows_a_redirect_to_the_final_url() {
        let target = spawn_stub("HTTP/1.1 200 OK\r\ncontent-length: 0\r\n\r\n").await;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let head = format!(
                    "HTTP/1.1 302 Found\r\nlocation: http://{}/final.mp4\r\ncontent-length: 0\r\n\r\n",
                    target
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        let resolver = RedirectResolver::new().unwrap();
        let out = resolver
            .resolve_final(&format!("http://{}/embed", addr), Duration::from_secs(5))
            .await
            .unwrap();
        assert_eq!(out, format!("http://{}/final.mp4", target));
    }

    #[tokio::test]
    async fn unresponsive_origin_times_out() {
        // Bind but never accept into a response
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _held = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let resolver = RedirectResolver::new().unwrap();
        let err = resolver
            .resolve_final(&format!("http://{}/slow", addr), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolveError::Timeout));
    }

    #[tokio::test]
    async fn dead_host_fails_before_the_resolution_window_closes() {
        // Non-routable TEST-NET address. The connect timeout has to fire
        // well before the caller's deadline so the rest of the chain still
        // gets a share of the budget.
        let resolver = RedirectResolver::new().unwrap();
        let started = std::time::Instant::now();
        let out = resolver
            .resolve_final("http://10.255.255.1:81/embed", Duration::from_secs(8))
            .await;
        assert!(out.is_err());
        assert!(started.elapsed() < Duration::from_secs(7));
    }
}
