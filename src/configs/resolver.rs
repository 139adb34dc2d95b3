use serde::{Deserialize, Serialize};

fn default_qualities() -> Vec<String> {
    ["144", "240", "360", "480", "720", "1080", "1440", "2160"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_quality() -> String {
    "360".to_string()
}

fn default_budget_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResolverConfig {
    /// Mirror host serving embed pages that redirect to raw media.
    pub mirror_host: String,
    /// Base URL of the legacy mirror, e.g. "http://legacy.example:64".
    pub legacy_base: String,
    #[serde(default = "default_quality")]
    pub default_quality: String,
    #[serde(default = "default_qualities")]
    pub qualities: Vec<String>,
    /// Wall-clock budget shared by the whole strategy chain, in seconds.
    #[serde(default = "default_budget_secs")]
    pub budget_secs: u64,
    /// Optional external resolver tool, e.g. ["venv/bin/python", "get_url.py"].
    /// The video id is appended as the final argument.
    #[serde(default)]
    pub external_command: Vec<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            mirror_host: String::new(),
            legacy_base: String::new(),
            default_quality: default_quality(),
            qualities: default_qualities(),
            budget_secs: default_budget_secs(),
            external_command: Vec::new(),
        }
    }
}
