use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::common::types::{QualityTier, VideoId};
use crate::resolve::strategy::{Budget, ResolutionStrategy};

/// Last-resort lookup against the legacy mirror's own metadata endpoint.
/// When the returned JSON embeds a direct media URL it is emitted verbatim,
/// with no reachability check of its own.
pub struct CatalogFallbackStrategy {
    legacy_base: String,
    client: Client,
}

impl CatalogFallbackStrategy {
    pub fn new(legacy_base: String, client: Client) -> Self {
        Self {
            legacy_base,
            client,
        }
    }

    fn info_url(&self, video_id: &VideoId) -> String {
        format!(
            "{}/get_video_info?video_id={}",
            self.legacy_base.trim_end_matches('/'),
            video_id
        )
    }

    fn extract_media_url(body: &serde_json::Value) -> Option<String> {
        body.get("video_url")
            .or_else(|| body.get("url"))
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
    }
}

#[async_trait]
impl ResolutionStrategy for CatalogFallbackStrategy {
    fn name(&self) -> &str {
        "catalog-fallback"
    }

    async fn resolve(
        &self,
        video_id: &VideoId,
        _quality: QualityTier,
        budget: &Budget,
    ) -> Option<String> {
        let url = self.info_url(video_id);

        let request = async {
            let response = self.client.get(&url).send().await?;
            response.json::<serde_json::Value>().await
        };

        match tokio::time::timeout(budget.remaining(), request).await {
            Ok(Ok(body)) => Self::extract_media_url(&body),
            Ok(Err(e)) => {
                debug!("catalog-fallback failed for {}: {}", video_id, e);
                None
            }
            Err(_) => {
                debug!("catalog-fallback timed out for {}", video_id);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_video_url_field_over_url() {
        let body = json!({"video_url": "http://a/x.mp4", "url": "http://b/y.mp4"});
        assert_eq!(
            CatalogFallbackStrategy::extract_media_url(&body).as_deref(),
            Some("http://a/x.mp4")
        );
    }

    #[test]
    fn falls_back_to_url_field() {
        let body = json!({"url": "http://b/y.mp4"});
        assert_eq!(
            CatalogFallbackStrategy::extract_media_url(&body).as_deref(),
            Some("http://b/y.mp4")
        );
    }

    #[test]
    fn empty_or_missing_field_yields_none() {
        assert_eq!(
            CatalogFallbackStrategy::extract_media_url(&json!({"video_url": ""})),
            None
        );
        assert_eq!(
            CatalogFallbackStrategy::extract_media_url(&json!({"title": "x"})),
            None
        );
    }
}
