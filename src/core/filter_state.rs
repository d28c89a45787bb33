use serde::{Deserialize, Serialize};

use crate::core::Availability;
use crate::error::{MatchEngineError, Result};

/// Default hourly rate window of the filter panel
pub const DEFAULT_RATE_RANGE: (f64, f64) = (0.0, 150.0);

/// User-selected constraints for one recommendation request.
///
/// Every set-valued field uses "empty = no constraint"; `min_rating == 0`
/// also means unconstrained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    /// Inclusive `[min, max]` hourly rate window
    pub hourly_rate: (f64, f64),

    #[serde(default)]
    pub skills: Vec<String>,

    #[serde(default)]
    pub availability: Vec<Availability>,

    /// Rating floor
    #[serde(default)]
    pub min_rating: f64,

    /// Substrings matched case-sensitively against the candidate location
    #[serde(default)]
    pub location: Vec<String>,

    #[serde(default)]
    pub languages: Vec<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            hourly_rate: DEFAULT_RATE_RANGE,
            skills: Vec::new(),
            availability: Vec::new(),
            min_rating: 0.0,
            location: Vec::new(),
            languages: Vec::new(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate_range(mut self, min: f64, max: f64) -> Self {
        self.hourly_rate = (min, max);
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_availability(mut self, availability: impl IntoIterator<Item = Availability>) -> Self {
        self.availability = availability.into_iter().collect();
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    pub fn with_locations<I, S>(mut self, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.location = locations.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_rate(&self) -> f64 {
        self.hourly_rate.0
    }

    pub fn max_rate(&self) -> f64 {
        self.hourly_rate.1
    }

    pub fn rate_in_range(&self, rate: f64) -> bool {
        self.min_rate() <= rate && rate <= self.max_rate()
    }

    pub fn has_skill_filter(&self) -> bool {
        !self.skills.is_empty()
    }

    /// Select a skill chip, or deselect it when already selected
    pub fn toggle_skill(&mut self, skill: &str) {
        if let Some(pos) = self.skills.iter().position(|s| s == skill) {
            self.skills.remove(pos);
        } else {
            self.skills.push(skill.to_string());
        }
    }

    /// Reject states the filter panel can never produce
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.hourly_rate;
        if min.is_nan() || max.is_nan() || self.min_rating.is_nan() {
            return Err(MatchEngineError::InvalidFilter("NaN in numeric bound".into()));
        }
        if min < 0.0 || max < 0.0 {
            return Err(MatchEngineError::InvalidFilter(format!(
                "hourly rate bounds must be non-negative, got [{}, {}]",
                min, max
            )));
        }
        if min > max {
            return Err(MatchEngineError::InvalidFilter(format!(
                "hourly rate min {} exceeds max {}",
                min, max
            )));
        }
        if !(0.0..=5.0).contains(&self.min_rating) {
            return Err(MatchEngineError::InvalidFilter(format!(
                "rating floor {} outside 0-5",
                self.min_rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconstrained() {
        let filters = FilterState::default();
        assert_eq!(filters.hourly_rate, (0.0, 150.0));
        assert!(!filters.has_skill_filter());
        assert!(filters.validate().is_ok());
    }

    #[test]
    fn test_toggle_skill() {
        let mut filters = FilterState::new();
        filters.toggle_skill("React");
        filters.toggle_skill("Go");
        assert_eq!(filters.skills, vec!["React", "Go"]);

        filters.toggle_skill("React");
        assert_eq!(filters.skills, vec!["Go"]);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let filters = FilterState::new().with_rate_range(90.0, 40.0);
        assert!(matches!(filters.validate(), Err(MatchEngineError::InvalidFilter(_))));
    }

    #[test]
    fn test_validate_rejects_rating_out_of_scale() {
        assert!(FilterState::new().with_min_rating(5.5).validate().is_err());
        assert!(FilterState::new().with_min_rating(f64::NAN).validate().is_err());
        assert!(FilterState::new().with_min_rating(4.95).validate().is_ok());
    }

    #[test]
    fn test_rate_in_range_is_inclusive() {
        let filters = FilterState::new().with_rate_range(40.0, 80.0);
        assert!(filters.rate_in_range(40.0));
        assert!(filters.rate_in_range(80.0));
        assert!(!filters.rate_in_range(80.5));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let filters: FilterState =
            serde_json::from_str(r#"{"hourly_rate":[10,20],"availability":["Hourly"]}"#).unwrap();
        assert_eq!(filters.hourly_rate, (10.0, 20.0));
        assert_eq!(filters.availability, vec![Availability::Hourly]);
        assert_eq!(filters.min_rating, 0.0);
    }
}
