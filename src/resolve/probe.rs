use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::trace;

use crate::common::http::HttpClient;

/// Fixed probe timeout, independent of the caller's resolution budget.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Headers-only reachability check for candidate asset URLs.
#[derive(Clone)]
pub struct ExistenceProbe {
    client: Client,
}

impl ExistenceProbe {
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: HttpClient::probe(PROBE_TIMEOUT)?,
        })
    }

    /// True iff the final response status is exactly 200. Anything else,
    /// including timeouts and transport errors, counts as absent. The strict
    /// equality is intentional: some mirrors serve soft-404 HTML with a 200,
    /// and callers accept that false positive rather than sniff bodies.
    pub async fn exists(&self, url: &str) -> bool {
        let result = tokio::time::timeout(PROBE_TIMEOUT, self.client.head(url).send()).await;

        match result {
            Ok(Ok(response)) => {
                let status = response.status();
                trace!("Probe {} -> {}", url, status);
                status == StatusCode::OK
            }
            Ok(Err(e)) => {
                trace!("Probe {} failed: {}", url, e);
                false
            }
            Err(_) => {
                trace!("Probe {} timed out", url);
                false
            }
        }
    }
}
