//! # Talent Match Engine
//!
//! Freelancer recommendation engine with:
//! - Strict filtering on rate, availability, rating, location and languages
//! - Interchangeable ranking strategies behind one `Strategy` enum
//! - Per-query strategy selection by quality score
//! - Single best approximate match when nothing passes the strict filter
//! - Bundled freelancer catalog and a CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use talent_match_engine::{Catalog, FilterState, RecommendationEngine};
//!
//! fn main() -> talent_match_engine::Result<()> {
//!     let engine = RecommendationEngine::new(Catalog::builtin()?);
//!
//!     let filters = FilterState::new()
//!         .with_rate_range(40.0, 100.0)
//!         .with_skills(["Python"]);
//!
//!     let shortlist = engine.recommend(&filters);
//!     for talent in &shortlist.candidates {
//!         println!("{} - ${}/h", talent.display_name(), talent.hourly_rate);
//!     }
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod filter;
pub mod preferences;
pub mod ranking;

// Re-export primary types
pub use catalog::{Catalog, SkillCategory};
pub use config::EngineOptions;
pub use core::{Availability, FilterState, Recommendation, RecommendationPath, StrategyScore, Talent};
pub use engine::{recommend, DisplayMode, RecommendationEngine};
pub use error::{MatchEngineError, Result};
pub use preferences::{Budget, ProjectNeeds, Timeline};
pub use ranking::Strategy;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
