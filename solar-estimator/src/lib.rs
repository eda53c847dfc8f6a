pub mod general;
pub mod sizing;

// Re-export commonly used items for convenience
pub use general::finance::project_savings;
pub use sizing::config::EstimatorConfig;
pub use sizing::estimator::estimate;
