use serde::Serialize;

use crate::core::Talent;
use crate::ranking::Strategy;

/// Branch the facade took to produce a shortlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationPath {
    /// Nothing passed the strict filter; best approximate match from the full catalog
    Fallback,
    /// Skills were requested; balanced-exposure ranking applied directly
    BalancedExposure,
    /// No skills requested; the best general strategy was picked by quality score
    Arbitrated,
}

/// Quality score one strategy earned during arbitration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyScore {
    pub strategy: Strategy,
    pub score: f64,
}

/// Shortlist with metadata about how it was produced
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    /// Ranked candidates, best first
    pub candidates: Vec<Talent>,

    pub path: RecommendationPath,

    /// Strategy whose ordering was returned (none on the fallback path)
    pub strategy: Option<Strategy>,

    /// Scores of every strategy evaluated by the arbiter, in evaluation order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub strategy_scores: Vec<StrategyScore>,

    /// Size of the strict-filtered set
    pub strict_matches: usize,

    /// Computation latency in milliseconds
    pub latency_ms: f64,
}

impl Recommendation {
    pub fn is_fallback(&self) -> bool {
        self.path == RecommendationPath::Fallback
    }

    pub fn top(&self) -> Option<&Talent> {
        self.candidates.first()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        let method = self.strategy.map(|s| s.label()).unwrap_or("relaxed match");
        format!(
            "{} candidate(s) via {:?} [{}] from {} strict match(es)",
            self.candidates.len(),
            self.path,
            method,
            self.strict_matches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Availability;

    fn sample(path: RecommendationPath, strategy: Option<Strategy>) -> Recommendation {
        Recommendation {
            candidates: vec![Talent::new("1", "A", 4.5, 50.0, Availability::Hourly)],
            path,
            strategy,
            strategy_scores: Vec::new(),
            strict_matches: 0,
            latency_ms: 0.1,
        }
    }

    #[test]
    fn test_fallback_display() {
        let rec = sample(RecommendationPath::Fallback, None);
        assert!(rec.is_fallback());
        assert_eq!(rec.top().map(|t| t.id.as_str()), Some("1"));
        assert!(rec.display().contains("relaxed match"));
    }

    #[test]
    fn test_serializes_path_in_snake_case() {
        let rec = sample(RecommendationPath::BalancedExposure, Some(Strategy::BalancedExposure));
        let json = serde_json::to_value(&rec).unwrap();
        assert_eq!(json["path"], "balanced_exposure");
        assert!(json.get("strategy_scores").is_none());
    }
}
