pub mod options;

use std::collections::HashSet;
use std::path::Path;

use crate::core::Talent;
use crate::error::{MatchEngineError, Result};

pub use options::{SkillCategory, LANGUAGE_OPTIONS, LOCATION_OPTIONS};

const BUILTIN_TALENT: &str = include_str!("../../data/talent.json");

/// Read-only collection of freelancer profiles
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    talents: Vec<Talent>,
}

impl Catalog {
    /// Build from profiles, rejecting duplicate ids
    pub fn new(talents: Vec<Talent>) -> Result<Self> {
        let mut seen = HashSet::new();
        for talent in &talents {
            if !seen.insert(talent.id.as_str()) {
                return Err(MatchEngineError::Catalog(format!(
                    "duplicate talent id '{}'",
                    talent.id
                )));
            }
        }
        Ok(Self { talents })
    }

    /// The bundled freelancer table
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_TALENT)
    }

    /// Parse a JSON array of profiles
    pub fn from_json(json: &str) -> Result<Self> {
        let talents: Vec<Talent> = serde_json::from_str(json)?;
        Self::new(talents)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), count = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn talents(&self) -> &[Talent] {
        &self.talents
    }

    pub fn get(&self, id: &str) -> Option<&Talent> {
        self.talents.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.talents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.talents.is_empty()
    }

    /// Distinct skills in catalog order
    pub fn skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.talents
            .iter()
            .flat_map(|t| t.skills.iter())
            .filter(|s| seen.insert(s.as_str()))
            .map(String::as_str)
            .collect()
    }
}

impl AsRef<[Talent]> for Catalog {
    fn as_ref(&self) -> &[Talent] {
        &self.talents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Availability;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 21);
        let sarah = catalog.get("1").unwrap();
        assert_eq!(sarah.name, "Sarah Chen");
        assert_eq!(sarah.availability, Availability::FullTime);
        assert!(catalog.talents().iter().all(|t| !t.skills.is_empty() && !t.languages.is_empty()));
    }

    #[test]
    fn test_builtin_max_rating_is_four_point_nine() {
        let catalog = Catalog::builtin().unwrap();
        let max = catalog.talents().iter().map(|t| t.rating).fold(0.0, f64::max);
        assert_eq!(max, 4.9);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let a = Talent::new("1", "A", 4.0, 10.0, Availability::Hourly);
        let b = Talent::new("1", "B", 4.0, 10.0, Availability::Hourly);
        assert!(matches!(Catalog::new(vec![a, b]), Err(MatchEngineError::Catalog(_))));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(Catalog::from_json("{"), Err(MatchEngineError::Json(_))));
    }

    #[test]
    fn test_distinct_skills() {
        let catalog = Catalog::new(vec![
            Talent::new("1", "A", 4.0, 10.0, Availability::Hourly).with_skills(["Go", "AWS"]),
            Talent::new("2", "B", 4.0, 10.0, Availability::Hourly).with_skills(["AWS", "Rust"]),
        ])
        .unwrap();
        assert_eq!(catalog.skills(), vec!["Go", "AWS", "Rust"]);

        let builtin = Catalog::builtin().unwrap();
        let skills = builtin.skills();
        assert!(skills.contains(&"Python"));
        assert!(!skills.contains(&"Rust"));
        assert!(builtin.talents().iter().all(|t| t.skills.iter().all(|s| skills.contains(&s.as_str()))));
    }
}
