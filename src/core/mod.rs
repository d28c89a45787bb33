pub mod filter_state;
pub mod recommendation;
pub mod talent;

pub use filter_state::FilterState;
pub use recommendation::{Recommendation, RecommendationPath, StrategyScore};
pub use talent::{Availability, Talent};
