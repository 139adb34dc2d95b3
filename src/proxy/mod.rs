pub mod image;
pub mod rewrite;
pub mod video;
