use std::time::Duration;

use tracing::{debug, info, trace};

use crate::common::http::HttpClient;
use crate::common::types::{QualityTier, VideoId};
use crate::configs::ResolverConfig;
use crate::resolve::probe::ExistenceProbe;
use crate::resolve::redirect::RedirectResolver;
use crate::resolve::strategies::{
    AlternatePathStrategy, CatalogFallbackStrategy, DirectAssetStrategy, ExternalCommandStrategy,
    MirrorEmbedStrategy, WatchRedirectStrategy,
};
use crate::resolve::strategy::{Budget, ResolutionStrategy};

/// Runs the ordered strategy chain for one (video id, quality) pair.
///
/// Strategies execute sequentially and share one wall-clock budget; the
/// first to produce a URL wins and nothing after it runs. Exhaustion is a
/// soft outcome surfaced as `None`, never an error.
pub struct VideoSourceResolver {
    strategies: Vec<Box<dyn ResolutionStrategy>>,
    budget: Duration,
}

impl VideoSourceResolver {
    pub fn new(config: &ResolverConfig) -> Result<Self, reqwest::Error> {
        let redirects = RedirectResolver::new()?;
        let probe = ExistenceProbe::new()?;
        let fallback_client = HttpClient::probe(Duration::from_secs(5))?;

        let mut strategies: Vec<Box<dyn ResolutionStrategy>> = vec![
            Box::new(MirrorEmbedStrategy::new(
                config.mirror_host.clone(),
                redirects.clone(),
            )),
            Box::new(DirectAssetStrategy::new(
                config.legacy_base.clone(),
                probe.clone(),
            )),
            Box::new(AlternatePathStrategy::new(
                config.legacy_base.clone(),
                probe,
            )),
            Box::new(WatchRedirectStrategy::new(
                config.legacy_base.clone(),
                redirects,
            )),
            Box::new(CatalogFallbackStrategy::new(
                config.legacy_base.clone(),
                fallback_client,
            )),
        ];

        if !config.external_command.is_empty() {
            strategies.push(Box::new(ExternalCommandStrategy::new(
                config.external_command.clone(),
            )));
        }

        for strategy in &strategies {
            info!("Registered resolution strategy: {}", strategy.name());
        }

        Ok(Self {
            strategies,
            budget: Duration::from_secs(config.budget_secs),
        })
    }

    /// Build a resolver over an explicit strategy list. Used by tests; the
    /// production chain comes from [`VideoSourceResolver::new`].
    pub fn with_strategies(
        strategies: Vec<Box<dyn ResolutionStrategy>>,
        budget: Duration,
    ) -> Self {
        Self { strategies, budget }
    }

    pub async fn resolve(&self, video_id: &VideoId, quality: QualityTier) -> Option<String> {
        let budget = Budget::new(self.budget);

        // Every strategy gets its turn, timeouts included: a strategy that
        // burned the shared budget leaves zero remaining, so the timed ones
        // after it fail instantly while the fixed-timeout probes still run.
        for strategy in &self.strategies {
            trace!(
                "Trying strategy '{}' for {} ({:?} remaining)",
                strategy.name(),
                video_id,
                budget.remaining()
            );

            if let Some(url) = strategy.resolve(video_id, quality, &budget).await {
                info!("Resolved {} via '{}': {}", video_id, strategy.name(), url);
                return Some(url);
            }
        }

        debug!("No playable source found for {}", video_id);
        None
    }
}
