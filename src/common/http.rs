use std::time::Duration;

use reqwest::{Client, Error, redirect};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";

const MAX_REDIRECT_HOPS: usize = 10;

pub struct HttpClient;

impl HttpClient {
    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    /// General-purpose client for catalog API calls.
    pub fn new() -> Result<Client, Error> {
        Client::builder()
            .user_agent(Self::default_user_agent())
            .timeout(Duration::from_secs(10))
            .build()
    }

    /// Client for redirect-following and existence probes against legacy
    /// mirrors. Those origins routinely serve broken certificates, so
    /// validation is relaxed here and only here. The caller supplies the
    /// connect timeout; it must stay well under the shared resolution
    /// budget so one dead mirror cannot eat the whole window during
    /// connect. Overall timeouts are applied per call by the resolve layer.
    pub fn probe(connect_timeout: Duration) -> Result<Client, Error> {
        Client::builder()
            .user_agent(Self::default_user_agent())
            .redirect(redirect::Policy::limited(MAX_REDIRECT_HOPS))
            .danger_accept_invalid_certs(true)
            .connect_timeout(connect_timeout)
            .build()
    }

    /// Client for the media/image relay path. No overall timeout: media
    /// transfers are long-lived and bounded by the peer, not the clock.
    pub fn streaming() -> Result<Client, Error> {
        Client::builder()
            .user_agent(Self::default_user_agent())
            .connect_timeout(Duration::from_secs(10))
            .build()
    }
}
