//! Project-needs form: coarse budget, timeline and focus answers that
//! overwrite parts of a [`FilterState`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::catalog::SkillCategory;
use crate::core::{Availability, FilterState};
use crate::error::MatchEngineError;

/// Skills taken from the focus category
const FOCUS_SKILLS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    /// Rate window for a budget; an unanswered budget gets the high window
    pub fn rate_range(budget: Option<Budget>) -> (f64, f64) {
        match budget {
            Some(Budget::Low) => (0.0, 40.0),
            Some(Budget::Medium) => (40.0, 80.0),
            Some(Budget::High) | None => (80.0, 200.0),
        }
    }
}

impl FromStr for Budget {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Budget::Low),
            "medium" => Ok(Budget::Medium),
            "high" => Ok(Budget::High),
            _ => Err(MatchEngineError::unknown("budget", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeline {
    Urgent,
    Flexible,
    Ongoing,
}

impl Timeline {
    /// Accepted engagement types; an unanswered timeline accepts all of them
    pub fn availability(timeline: Option<Timeline>) -> Vec<Availability> {
        match timeline {
            Some(Timeline::Urgent) => vec![Availability::FullTime, Availability::Hourly],
            Some(Timeline::Flexible) => vec![Availability::PartTime, Availability::AsNeeded],
            Some(Timeline::Ongoing) | None => Availability::ALL.to_vec(),
        }
    }
}

impl FromStr for Timeline {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "urgent" => Ok(Timeline::Urgent),
            "flexible" => Ok(Timeline::Flexible),
            "ongoing" => Ok(Timeline::Ongoing),
            _ => Err(MatchEngineError::unknown("timeline", s)),
        }
    }
}

/// Answers from the project-needs form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectNeeds {
    #[serde(default)]
    pub focus: Option<SkillCategory>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub timeline: Option<Timeline>,
}

impl ProjectNeeds {
    /// Overwrite rate window and availability always; skills only when a focus is chosen
    pub fn apply(&self, filters: &FilterState) -> FilterState {
        let mut next = filters.clone();
        next.hourly_rate = Budget::rate_range(self.budget);
        next.availability = Timeline::availability(self.timeline);

        if let Some(focus) = self.focus {
            next.skills = focus
                .skills()
                .iter()
                .take(FOCUS_SKILLS)
                .map(|s| s.to_string())
                .collect();
        }
        next
    }
}
