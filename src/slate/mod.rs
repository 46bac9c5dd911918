pub mod reader;
pub mod types;

pub use reader::{latest_slate_in, load_slate};
pub use types::{Driver, Lineup, ScoredDriver};
