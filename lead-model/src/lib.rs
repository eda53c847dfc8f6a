pub mod estimate;
pub mod general;
