//! Strategies against the self-hosted legacy mirror: two fixed asset paths
//! checked with a headers-only probe, and a watch endpoint that redirects
//! to wherever the media currently lives.

use async_trait::async_trait;
use tracing::debug;

use crate::common::types::{QualityTier, VideoId};
use crate::resolve::probe::ExistenceProbe;
use crate::resolve::redirect::RedirectResolver;
use crate::resolve::strategy::{Budget, ResolutionStrategy};

/// `{legacy_base}/assets/{id}.mp4`, taken as final without any
/// redirect-following when the probe says it is there.
pub struct DirectAssetStrategy {
    legacy_base: String,
    probe: ExistenceProbe,
}

impl DirectAssetStrategy {
    pub fn new(legacy_base: String, probe: ExistenceProbe) -> Self {
        Self { legacy_base, probe }
    }

    fn asset_url(&self, video_id: &VideoId) -> String {
        format!("{}/assets/{}.mp4", self.legacy_base.trim_end_matches('/'), video_id)
    }
}

#[async_trait]
impl ResolutionStrategy for DirectAssetStrategy {
    fn name(&self) -> &str {
        "legacy-asset"
    }

    async fn resolve(
        &self,
        video_id: &VideoId,
        _quality: QualityTier,
        _budget: &Budget,
    ) -> Option<String> {
        let url = self.asset_url(video_id);
        if self.probe.exists(&url).await {
            Some(url)
        } else {
            None
        }
    }
}

/// `{legacy_base}/videos/{id}.mp4`, the older upload layout.
pub struct AlternatePathStrategy {
    legacy_base: String,
    probe: ExistenceProbe,
}

impl AlternatePathStrategy {
    pub fn new(legacy_base: String, probe: ExistenceProbe) -> Self {
        Self { legacy_base, probe }
    }

    fn asset_url(&self, video_id: &VideoId) -> String {
        format!("{}/videos/{}.mp4", self.legacy_base.trim_end_matches('/'), video_id)
    }
}

#[async_trait]
impl ResolutionStrategy for AlternatePathStrategy {
    fn name(&self) -> &str {
        "legacy-alt-path"
    }

    async fn resolve(
        &self,
        video_id: &VideoId,
        _quality: QualityTier,
        _budget: &Budget,
    ) -> Option<String> {
        let url = self.asset_url(video_id);
        if self.probe.exists(&url).await {
            Some(url)
        } else {
            None
        }
    }
}

/// `{legacy_base}/watch?v={id}&format=mp4`, followed through redirects
/// under the shared budget.
pub struct WatchRedirectStrategy {
    legacy_base: String,
    redirects: RedirectResolver,
}

impl WatchRedirectStrategy {
    pub fn new(legacy_base: String, redirects: RedirectResolver) -> Self {
        Self {
            legacy_base,
            redirects,
        }
    }

    fn watch_url(&self, video_id: &VideoId) -> String {
        format!(
            "{}/watch?v={}&format=mp4",
            self.legacy_base.trim_end_matches('/'),
            video_id
        )
    }
}

#[async_trait]
impl ResolutionStrategy for WatchRedirectStrategy {
    fn name(&self) -> &str {
        "legacy-watch"
    }

    async fn resolve(
        &self,
        video_id: &VideoId,
        _quality: QualityTier,
        budget: &Budget,
    ) -> Option<String> {
        let url = self.watch_url(video_id);
        match self.redirects.resolve_final(&url, budget.remaining()).await {
            Ok(final_url) => Some(final_url),
            Err(e) => {
                debug!("legacy-watch failed for {}: {}", video_id, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_drop_trailing_slash_on_base() {
        let probe = ExistenceProbe::new().unwrap();
        let direct = DirectAssetStrategy::new("http://legacy.example:64/".to_string(), probe.clone());
        assert_eq!(
            direct.asset_url(&VideoId::from("abc123")),
            "http://legacy.example:64/assets/abc123.mp4"
        );

        let alt = AlternatePathStrategy::new("http://legacy.example:64".to_string(), probe);
        assert_eq!(
            alt.asset_url(&VideoId::from("abc123")),
            "http://legacy.example:64/videos/abc123.mp4"
        );
    }

    #[test]
    fn watch_url_shape() {
        let watch = WatchRedirectStrategy::new(
            "http://legacy.example:64".to_string(),
            RedirectResolver::new().unwrap(),
        );
        assert_eq!(
            watch.watch_url(&VideoId::from("abc123")),
            "http://legacy.example:64/watch?v=abc123&format=mp4"
        );
    }
}
