pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{base_points, fanduel_score, filter_eligible, score_slate};
pub use validation::validate_scoring;
