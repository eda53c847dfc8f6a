pub mod consumption;
pub mod finance;

pub use finance::{payback_period, project_savings};
