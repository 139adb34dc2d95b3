use tracing_subscriber::{EnvFilter, fmt, fmt::time::LocalTime};

use crate::configs::Config;

pub fn init(config: &Config) {
  let log_level = config
    .logging
    .as_ref()
    .and_then(|l| l.level.as_deref())
    .unwrap_or("info");

  let filters = config
    .logging
    .as_ref()
    .and_then(|l| l.filters.as_deref())
    .unwrap_or("");

  let filter_str = if filters.is_empty() {
    log_level.to_string()
  } else {
    format!("{},{}", log_level, filters)
  };

  // RUST_LOG takes precedence over the config file
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

  fmt()
    .with_env_filter(env_filter)
    .with_timer(LocalTime::rfc_3339())
    .with_target(true)
    .init();
}
