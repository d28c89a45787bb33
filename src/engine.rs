use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::{EngineOptions, DEFAULT_TOP_N};
use crate::core::{FilterState, Recommendation, RecommendationPath, Talent};
use crate::error::{MatchEngineError, Result};
use crate::filter::{display_filter, matches_query, strict_filter};
use crate::ranking::{relaxed_match, Arbiter, Strategy};

/// Which list the results view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Ranked shortlist from the recommendation pipeline
    #[default]
    Fairness,
    /// Every display-filtered profile, unranked
    Best,
}

impl FromStr for DisplayMode {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fairness" => Ok(DisplayMode::Fairness),
            "best" => Ok(DisplayMode::Best),
            _ => Err(MatchEngineError::unknown("display mode", s)),
        }
    }
}

/// Ranked shortlist for `filters` over `catalog`, capped at ten
pub fn recommend(catalog: &[Talent], filters: &FilterState) -> Vec<Talent> {
    run_pipeline(catalog, filters, DEFAULT_TOP_N).candidates
}

/// Strict filter, then fallback, balanced exposure or arbitration
fn run_pipeline(catalog: &[Talent], filters: &FilterState, top_n: usize) -> Recommendation {
    let start = Instant::now();
    let strict = strict_filter(catalog, filters);
    let strict_matches = strict.len();

    let (path, strategy, strategy_scores, candidates) = if strict.is_empty() {
        let best: Vec<Talent> = relaxed_match(catalog, filters).into_iter().collect();
        tracing::info!(found = best.len(), "no strict matches, using relaxed match");
        (RecommendationPath::Fallback, None, Vec::new(), best)
    } else if filters.has_skill_filter() {
        let mut ranked = Strategy::BalancedExposure.rank_with(&strict, filters, &mut rand::thread_rng());
        ranked.truncate(top_n);
        tracing::info!(strict_matches, "skills requested, ranking by balanced exposure");
        (
            RecommendationPath::BalancedExposure,
            Some(Strategy::BalancedExposure),
            Vec::new(),
            ranked,
        )
    } else {
        let (winner, scores) = Arbiter::default().arbitrate(&strict, filters, &mut rand::thread_rng());
        match winner {
            Some(mut winner) => {
                winner.candidates.truncate(top_n);
                tracing::info!(
                    strict_matches,
                    strategy = winner.strategy.key(),
                    score = winner.score,
                    "arbitration selected strategy"
                );
                (
                    RecommendationPath::Arbitrated,
                    Some(winner.strategy),
                    scores,
                    winner.candidates,
                )
            }
            None => (RecommendationPath::Arbitrated, None, scores, Vec::new()),
        }
    };

    Recommendation {
        candidates,
        path,
        strategy,
        strategy_scores,
        strict_matches,
        latency_ms: start.elapsed().as_secs_f64() * 1000.0,
    }
}

/// Recommendation facade over a fixed catalog
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    catalog: Catalog,
    options: EngineOptions,
}

impl RecommendationEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_options(catalog, EngineOptions::default())
    }

    pub fn with_options(catalog: Catalog, options: EngineOptions) -> Self {
        Self {
            catalog,
            options: options.sanitized(),
        }
    }

    /// Engine over the bundled catalog, options taken from the environment
    pub fn builtin() -> Result<Self> {
        Ok(Self::with_options(Catalog::builtin()?, EngineOptions::from_env()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Produce a shortlist with metadata about how it was chosen
    pub fn recommend(&self, filters: &FilterState) -> Recommendation {
        run_pipeline(self.catalog.talents(), filters, self.options.top_n)
    }

    /// Validate `filters` first, then recommend
    pub fn try_recommend(&self, filters: &FilterState) -> Result<Recommendation> {
        filters.validate()?;
        Ok(self.recommend(filters))
    }

    /// Profiles the results view shows for a mode and search query
    pub fn displayed(&self, filters: &FilterState, mode: DisplayMode, query: &str) -> Vec<Talent> {
        let base = match mode {
            DisplayMode::Fairness => self.recommend(filters).candidates,
            DisplayMode::Best => display_filter(self.catalog.talents(), filters),
        };
        base.into_iter().filter(|t| matches_query(t, query)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Availability;

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn test_engine_creation() {
        assert_eq!(engine().catalog().len(), 21);
    }

    #[test]
    fn test_empty_catalog() {
        let engine = RecommendationEngine::new(Catalog::default());
        let rec = engine.recommend(&FilterState::default());
        assert!(rec.is_empty());
        assert!(rec.is_fallback());
        assert!(recommend(&[], &FilterState::new().with_skills(["Go"])).is_empty());
    }

    #[test]
    fn test_arbitrated_path_caps_at_top_n() {
        let rec = engine().recommend(&FilterState::default());
        assert_eq!(rec.path, RecommendationPath::Arbitrated);
        assert_eq!(rec.len(), 10);
        assert_eq!(rec.strategy_scores.len(), 4);
        assert!(rec.strategy.map(|s| Strategy::GENERAL.contains(&s)).unwrap_or(false));
    }

    #[test]
    fn test_top_n_option() {
        let engine = RecommendationEngine::with_options(
            Catalog::builtin().unwrap(),
            EngineOptions::default().with_top_n(3),
        );
        assert_eq!(engine.recommend(&FilterState::default()).len(), 3);
    }

    #[test]
    fn test_oversized_top_n_still_caps_at_ten() {
        let engine = RecommendationEngine::with_options(
            Catalog::builtin().unwrap(),
            EngineOptions::default().with_top_n(20),
        );
        assert_eq!(engine.options().top_n, 10);
        assert_eq!(engine.recommend(&FilterState::default()).len(), 10);
        assert_eq!(
            engine.recommend(&FilterState::default().with_skills(["Rust"])).len(),
            10
        );

        let literal = RecommendationEngine::with_options(
            Catalog::builtin().unwrap(),
            EngineOptions { top_n: 50 },
        );
        assert_eq!(literal.recommend(&FilterState::default()).len(), 10);
    }

    #[test]
    fn test_balanced_path_when_skills_requested() {
        let rec = engine().recommend(&FilterState::default().with_skills(["Python"]));
        assert_eq!(rec.path, RecommendationPath::BalancedExposure);
        assert!(rec.strategy_scores.is_empty());
        assert!(rec.len() <= 10);
    }

    #[test]
    fn test_fallback_returns_single() {
        let rec = engine().recommend(&FilterState::default().with_min_rating(4.95));
        assert!(rec.is_fallback());
        assert_eq!(rec.len(), 1);
        assert_eq!(rec.strict_matches, 0);
    }

    #[test]
    fn test_try_recommend_rejects_invalid() {
        let filters = FilterState::default().with_rate_range(100.0, 10.0);
        assert!(engine().try_recommend(&filters).is_err());
    }

    #[test]
    fn test_best_mode_applies_any_skill_filter() {
        let filters = FilterState::default().with_skills(["Python", "Swift"]);
        let shown = engine().displayed(&filters, DisplayMode::Best, "");
        assert!(!shown.is_empty());
        assert!(shown.iter().all(|t| t.has_skill("Python") || t.has_skill("Swift")));
    }

    #[test]
    fn test_query_narrows_display() {
        let shown = engine().displayed(&FilterState::default(), DisplayMode::Best, "kubernetes");
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name, "Evelyn Lewis");
    }

    #[test]
    fn test_display_mode_parse() {
        assert_eq!("Best".parse::<DisplayMode>().unwrap(), DisplayMode::Best);
        assert!("worst".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_availability_filter_reaches_strategies() {
        let filters = FilterState::default().with_availability([Availability::Hourly]);
        let rec = engine().recommend(&filters);
        assert!(!rec.is_empty());
        assert!(rec.candidates.iter().all(|t| t.availability == Availability::Hourly));
    }
}
