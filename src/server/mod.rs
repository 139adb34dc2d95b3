use reqwest::Client;

use crate::catalog::CatalogClient;
use crate::common::http::HttpClient;
use crate::common::types::AnyResult;
use crate::configs::Config;
use crate::resolve::VideoSourceResolver;

/// Shared, read-only state handed to every request handler. All per-request
/// data lives on the handler stack; nothing here mutates after startup.
pub struct AppState {
    pub config: Config,
    pub catalog: CatalogClient,
    pub resolver: VideoSourceResolver,
    /// Client for the media/image relay path (strict TLS, no total timeout).
    pub streaming: Client,
}

impl AppState {
    pub fn new(config: Config) -> AnyResult<Self> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let resolver = VideoSourceResolver::new(&config.resolver)?;
        let streaming = HttpClient::streaming()?;

        Ok(Self {
            config,
            catalog,
            resolver,
            streaming,
        })
    }
}
