use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchEngineError;

/// Engagement type a freelancer offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Availability {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    #[serde(rename = "Hourly")]
    Hourly,
    #[serde(rename = "As Needed")]
    AsNeeded,
}

impl Availability {
    /// Every option, in the order the filter panel lists them
    pub const ALL: [Availability; 4] = [
        Availability::FullTime,
        Availability::PartTime,
        Availability::Hourly,
        Availability::AsNeeded,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Availability::FullTime => "Full-time",
            Availability::PartTime => "Part-time",
            Availability::Hourly => "Hourly",
            Availability::AsNeeded => "As Needed",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Availability {
    type Err = MatchEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Availability::ALL
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| MatchEngineError::unknown("availability", s))
    }
}

/// A freelancer profile from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Talent {
    /// Opaque catalog id
    pub id: String,

    pub name: String,

    /// Headline, e.g. "Cloud Architect"
    #[serde(default)]
    pub title: String,

    /// Free-text location, e.g. "Berlin, Germany"
    #[serde(default)]
    pub location: String,

    /// Average client rating (0.0-5.0)
    pub rating: f64,

    /// Hourly rate in the catalog's currency unit
    pub hourly_rate: f64,

    #[serde(default)]
    pub completed_projects: u32,

    /// Success rate as a percentage (0-100)
    #[serde(default)]
    pub success_rate: f64,

    pub skills: Vec<String>,

    pub languages: Vec<String>,

    #[serde(default)]
    pub verification_badges: Vec<String>,

    pub availability: Availability,

    /// Profile blurb, searched by the free-text query
    #[serde(default)]
    pub description: String,
}

impl Talent {
    /// Create a new Talent with required fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        rating: f64,
        hourly_rate: f64,
        availability: Availability,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: String::new(),
            location: String::new(),
            rating,
            hourly_rate,
            completed_projects: 0,
            success_rate: 0.0,
            skills: Vec::new(),
            languages: Vec::new(),
            verification_badges: Vec::new(),
            availability,
            description: String::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
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

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_track_record(mut self, completed_projects: u32, success_rate: f64) -> Self {
        self.completed_projects = completed_projects;
        self.success_rate = success_rate;
        self
    }

    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }

    /// How many of `requested` this profile lists (duplicates in `requested` count twice)
    pub fn matched_skill_count(&self, requested: &[String]) -> usize {
        requested.iter().filter(|s| self.has_skill(s)).count()
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if self.title.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, self.title)
        }
    }
}
