pub mod probe;
pub mod redirect;
pub mod resolver;
pub mod strategies;
pub mod strategy;

pub use probe::ExistenceProbe;
pub use redirect::RedirectResolver;
pub use resolver::VideoSourceResolver;
pub use strategy::{Budget, ResolutionStrategy};
