pub mod model;
pub mod service;

pub use model::NavEntry;
pub use service::NavigationFilter;
