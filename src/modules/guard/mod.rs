pub mod model;
pub mod service;

pub use model::RouteDecision;
pub use service::RouteGuard;
