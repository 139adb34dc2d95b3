pub mod proxy;
pub mod search;
pub mod version;
pub mod video;
