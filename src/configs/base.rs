use serde::{Deserialize, Serialize};

use crate::common::types::AnyResult;
use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
  pub server: ServerConfig,
  #[serde(default)]
  pub logging: Option<LoggingConfig>,
  pub catalog: CatalogConfig,
  pub resolver: ResolverConfig,
  #[serde(default)]
  pub proxy: ProxyConfig,
}

impl Config {
  pub fn load() -> AnyResult<Self> {
    let config_path = if std::path::Path::new("config.toml").exists() {
      "config.toml"
    } else if std::path::Path::new("config.default.toml").exists() {
      "config.default.toml"
    } else {
      return Err("config.toml or config.default.toml not found".into());
    };

    let config_str = std::fs::read_to_string(config_path)?;
    if config_str.is_empty() {
      return Err(format!("{} is empty", config_path).into());
    }

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_minimal_config() {
    let toml_str = r#"
      [server]
      host = "127.0.0.1"
      port = 9000
      public_url = "http://localhost:9000"

      [catalog]
      api_key = "test-key"

      [resolver]
      mirror_host = "mirror.example"
      legacy_base = "http://legacy.example:64"

      [proxy]
      use_thumbnail_proxy = true
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.catalog.max_comments, 5);
    assert_eq!(config.resolver.default_quality, "360");
    assert_eq!(config.resolver.qualities.len(), 8);
    assert_eq!(config.resolver.budget_secs, 10);
    assert!(config.resolver.external_command.is_empty());
    assert!(config.proxy.use_thumbnail_proxy);
    assert!(!config.proxy.use_video_proxy);
  }
}
