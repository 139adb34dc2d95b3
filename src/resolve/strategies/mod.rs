pub mod catalog_fallback;
pub mod external;
pub mod legacy;
pub mod mirror_embed;

pub use catalog_fallback::CatalogFallbackStrategy;
pub use external::ExternalCommandStrategy;
pub use legacy::{DirectAssetStrategy, AlternatePathStrategy, WatchRedirectStrategy};
pub use mirror_embed::MirrorEmbedStrategy;
