pub mod catalog;
pub mod common;
pub mod configs;
pub mod proxy;
pub mod resolve;
pub mod server;
pub mod transport;
