pub mod config;
pub mod estimator;
pub mod plot;

pub use config::EstimatorConfig;
pub use estimator::estimate;
