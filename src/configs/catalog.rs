use serde::{Deserialize, Serialize};

fn default_api_base() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_max_comments() -> u32 {
    5
}

fn default_max_search_results() -> u32 {
    10
}

/// Upstream video-catalog API (YouTube Data API v3 shape).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CatalogConfig {
    pub api_key: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_max_comments")]
    pub max_comments: u32,
    #[serde(default = "default_max_search_results")]
    pub max_search_results: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base: default_api_base(),
            max_comments: default_max_comments(),
            max_search_results: default_max_search_results(),
        }
    }
}
