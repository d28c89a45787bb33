pub mod arbiter;
pub mod balanced;
pub mod baseline;
pub mod linear;
pub mod quality;
pub mod rate_centrality;
pub mod relaxed;
pub mod skill_match;

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::core::{FilterState, Talent};
use crate::error::MatchEngineError;

pub use arbiter::{quality_score, Arbiter, ScoredStrategyResult};
pub use relaxed::{relaxed_match, RelaxedScore};

/// Closed set of ranking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Superset filter on requested skills, ordered by match count
    SkillMatch,
    /// Closeness to the mean rate plus skill breadth
    RateCentrality,
    /// Pairwise rating / projects / success comparator
    MultiFactorQuality,
    /// Weighted linear score over skills, rating, success and price
    WeightedLinear,
    /// Skill relevance tempered by exposure fairness; used when skills are requested
    BalancedExposure,
    /// Uninformed shuffle, lower-bound reference
    Baseline,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::SkillMatch,
        Strategy::RateCentrality,
        Strategy::MultiFactorQuality,
        Strategy::WeightedLinear,
        Strategy::BalancedExposure,
        Strategy::Baseline,
    ];

    /// Strategies the arbiter compares when no skills are requested, in evaluation order
    pub const GENERAL: [Strategy; 4] = [
        Strategy::SkillMatch,
        Strategy::RateCentrality,
        Strategy::MultiFactorQuality,
        Strategy::WeightedLinear,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Strategy::SkillMatch => "skill_match",
            Strategy::RateCentrality => "rate_centrality",
            Strategy::MultiFactorQuality => "multi_factor_quality",
            Strategy::WeightedLinear => "weighted_linear",
            Strategy::BalancedExposure => "balanced_exposure",
            Strategy::Baseline => "baseline",
        }
    }

    /// Product-facing model name
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::SkillMatch => "Content-Based Filtering",
            Strategy::RateCentrality => "NMF Collaborative Filtering",
            Strategy::MultiFactorQuality => "Random Forest",
            Strategy::WeightedLinear => "Linear Ranking",
            Strategy::BalancedExposure => "PPO Recommender",
            Strategy::Baseline => "Random Baseline",
        }
    }

    /// Rank with an explicit randomness source; only `Baseline` draws from it
    pub fn rank_with<R: Rng + ?Sized>(
        &self,
        candidates: &[Talent],
        filters: &FilterState,
        rng: &mut R,
    ) -> Vec<Talent> {
        match self {
            Strategy::SkillMatch => skill_match::rank(candidates, filters),
            Strategy::RateCentrality => rate_centrality::rank(candidates),
            Strategy::MultiFactorQuality => quality::rank(candidates),
            Strategy::WeightedLinear => linear::rank(candidates, filters),
            Strategy::BalancedExposure => balanced::rank(candidates, filters),
            Strategy::Baseline => baseline::rank(candidates, rng),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Strategy {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Strategy::ALL
            .into_iter()
            .find(|st| st.key() == wanted || st.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MatchEngineError::unknown("strategy", s))
    }
}

/// Candidate with its strategy score
#[derive(Debug, Clone)]
pub struct RankedCandidate {
    pub talent: Talent,
    pub score: f64,
}

impl RankedCandidate {
    pub fn new(talent: Talent, score: f64) -> Self {
        Self { talent, score }
    }
}

/// Matched / requested skill ratio, or `None` when no skills are requested
pub fn skill_match_ratio(talent: &Talent, filters: &FilterState) -> Option<f64> {
    if filters.skills.is_empty() {
        return None;
    }
    Some(talent.matched_skill_count(&filters.skills) as f64 / filters.skills.len() as f64)
}

/// Score every candidate and stable-sort descending; ties keep input order
pub(crate) fn rank_by_score<F>(candidates: &[Talent], score: F) -> Vec<RankedCandidate>
where
    F: Fn(&Talent) -> f64,
{
    let mut ranked: Vec<RankedCandidate> = candidates
        .iter()
        .map(|t| RankedCandidate::new(t.clone(), score(t)))
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

pub(crate) fn into_talents(ranked: Vec<RankedCandidate>) -> Vec<Talent> {
    ranked.into_iter().map(|r| r.talent).collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::core::{Availability, Talent};

    pub fn talent(id: &str, rating: f64, rate: f64, skills: &[&str]) -> Talent {
        Talent::new(id, format!("Talent {}", id), rating, rate, Availability::FullTime)
            .with_skills(skills.iter().copied())
            .with_languages(["English"])
    }

    pub fn ids(talents: &[Talent]) -> Vec<&str> {
        talents.iter().map(|t| t.id.as_str()).collect()
    }
}
