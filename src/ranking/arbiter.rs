//! Model selection: run several strategies over the same candidates and keep
//! the ordering with the best quality score.

use rand::Rng;

use crate::core::{FilterState, StrategyScore, Talent};
use crate::ranking::{skill_match_ratio, Strategy};

const RELEVANCE_WEIGHT: f64 = 0.7;
const RATING_WEIGHT: f64 = 0.3;

/// One strategy's ordering and the quality score it earned
#[derive(Debug, Clone)]
pub struct ScoredStrategyResult {
    pub strategy: Strategy,
    pub candidates: Vec<Talent>,
    pub score: f64,
}

impl ScoredStrategyResult {
    pub fn summary(&self) -> StrategyScore {
        StrategyScore {
            strategy: self.strategy,
            score: self.score,
        }
    }
}

/// `0.7 * mean skill match ratio + 0.3 * mean rating / 5`, 0 for an empty list.
///
/// The skill term is 1.0 when no skills are requested.
pub fn quality_score(candidates: &[Talent], filters: &FilterState) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    let n = candidates.len() as f64;

    let relevance = if filters.has_skill_filter() {
        candidates
            .iter()
            .filter_map(|t| skill_match_ratio(t, filters))
            .sum::<f64>()
            / n
    } else {
        1.0
    };

    let rating = candidates.iter().map(|t| t.rating).sum::<f64>() / (n * 5.0);

    RELEVANCE_WEIGHT * relevance + RATING_WEIGHT * rating
}

/// Picks the best-scoring ordering among a fixed strategy set
#[derive(Debug, Clone)]
pub struct Arbiter {
    strategies: Vec<Strategy>,
}

impl Default for Arbiter {
    fn default() -> Self {
        Self::new(Strategy::GENERAL)
    }
}

impl Arbiter {
    pub fn new(strategies: impl IntoIterator<Item = Strategy>) -> Self {
        Self {
            strategies: strategies.into_iter().collect(),
        }
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Run and score every strategy, in order
    pub fn evaluate<R: Rng + ?Sized>(
        &self,
        candidates: &[Talent],
        filters: &FilterState,
        rng: &mut R,
    ) -> Vec<ScoredStrategyResult> {
        self.strategies
            .iter()
            .map(|&strategy| {
                let ranked = strategy.rank_with(candidates, filters, &mut *rng);
                let score = quality_score(&ranked, filters);
                tracing::debug!(strategy = strategy.key(), score, "strategy evaluated");
                ScoredStrategyResult {
                    strategy,
                    candidates: ranked,
                    score,
                }
            })
            .collect()
    }

    /// Highest score wins; on ties the earliest strategy is kept
    pub fn select(results: Vec<ScoredStrategyResult>) -> Option<ScoredStrategyResult> {
        results.into_iter().reduce(|best, current| {
            if current.score > best.score {
                current
            } else {
                best
            }
        })
    }

    /// Evaluate and select in one go; also returns every strategy's score
    pub fn arbitrate<R: Rng + ?Sized>(
        &self,
        candidates: &[Talent],
        filters: &FilterState,
        rng: &mut R,
    ) -> (Option<ScoredStrategyResult>, Vec<StrategyScore>) {
        let results = self.evaluate(candidates, filters, rng);
        let scores = results.iter().map(ScoredStrategyResult::summary).collect();
        (Self::select(results), scores)
    }
}
