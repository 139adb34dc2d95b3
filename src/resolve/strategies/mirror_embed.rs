use async_trait::async_trait;
use tracing::debug;

use crate::common::types::{QualityTier, VideoId};
use crate::resolve::redirect::RedirectResolver;
use crate::resolve::strategy::{Budget, ResolutionStrategy};

/// Builds an embed URL on the configured mirror host and follows its
/// redirect chain to the raw media it serves.
pub struct MirrorEmbedStrategy {
    mirror_host: String,
    redirects: RedirectResolver,
}

impl MirrorEmbedStrategy {
    pub fn new(mirror_host: String, redirects: RedirectResolver) -> Self {
        Self {
            mirror_host,
            redirects,
        }
    }

    fn embed_url(&self, video_id: &VideoId, quality: QualityTier) -> String {
        format!(
            "https://{}/embed/{}?raw=1&quality={}",
            self.mirror_host, video_id, quality
        )
    }
}

#[async_trait]
impl ResolutionStrategy for MirrorEmbedStrategy {
    fn name(&self) -> &str {
        "mirror-embed"
    }

    async fn resolve(
        &self,
        video_id: &VideoId,
        quality: QualityTier,
        budget: &Budget,
    ) -> Option<String> {
        let url = self.embed_url(video_id, quality);
        match self.redirects.resolve_final(&url, budget.remaining()).await {
            Ok(final_url) => Some(final_url),
            Err(e) => {
                debug!("mirror-embed failed for {}: {}", video_id, e);
                None
            }
        }
    }
}
