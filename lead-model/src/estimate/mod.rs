pub mod projection;
pub mod sizing;
