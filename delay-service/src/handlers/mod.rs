pub mod fallback;
pub mod health;
pub mod predict;

pub use fallback::not_found;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use predict::predict;
