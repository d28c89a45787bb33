//! Approximate matching for queries nothing satisfies.
//!
//! Each candidate earns up to 100 points: rating 40, rate 30, skills 20,
//! availability 5 and location 5. Availability and location only award
//! points when a constraint is set and met.

use serde::Serialize;

use crate::core::{FilterState, Talent};
use crate::filter::{availability_ok, location_ok};

const RATING_POINTS: f64 = 40.0;
const RATE_POINTS: f64 = 30.0;
const SKILL_POINTS: f64 = 20.0;
const AVAILABILITY_POINTS: f64 = 5.0;
const LOCATION_POINTS: f64 = 5.0;

/// Per-component breakdown of a relaxed-match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RelaxedScore {
    pub rating: f64,
    pub rate: f64,
    pub skills: f64,
    pub availability: f64,
    pub location: f64,
}

impl RelaxedScore {
    pub fn total(&self) -> f64 {
        self.rating + self.rate + self.skills + self.availability + self.location
    }
}

fn rating_points(talent: &Talent, filters: &FilterState) -> f64 {
    if talent.rating >= filters.min_rating || filters.min_rating <= 0.0 {
        RATING_POINTS
    } else {
        (RATING_POINTS * talent.rating / filters.min_rating).max(0.0)
    }
}

fn rate_points(talent: &Talent, filters: &FilterState) -> f64 {
    if filters.rate_in_range(talent.hourly_rate) {
        return RATE_POINTS;
    }

    let (min, max) = filters.hourly_rate;
    let mid_range = (min + max) / 2.0;
    if mid_range <= 0.0 {
        return 0.0;
    }

    let distance = (talent.hourly_rate - min)
        .abs()
        .min((talent.hourly_rate - max).abs());
    (RATE_POINTS * (1.0 - distance / mid_range)).max(0.0)
}

fn skill_points(talent: &Talent, filters: &FilterState) -> f64 {
    if filters.skills.is_empty() {
        return SKILL_POINTS;
    }
    SKILL_POINTS * talent.matched_skill_count(&filters.skills) as f64 / filters.skills.len() as f64
}

pub fn score(talent: &Talent, filters: &FilterState) -> RelaxedScore {
    let availability = if !filters.availability.is_empty() && availability_ok(talent, filters) {
        AVAILABILITY_POINTS
    } else {
        0.0
    };
    let location = if !filters.location.is_empty() && location_ok(talent, filters) {
        LOCATION_POINTS
    } else {
        0.0
    };

    RelaxedScore {
        rating: rating_points(talent, filters),
        rate: rate_points(talent, filters),
        skills: skill_points(talent, filters),
        availability,
        location,
    }
}

/// Score the whole catalog, catalog order preserved
pub fn score_all<'a>(catalog: &'a [Talent], filters: &FilterState) -> Vec<(&'a Talent, RelaxedScore)> {
    catalog.iter().map(|t| (t, score(t, filters))).collect()
}

/// Single best approximate match; the earliest candidate wins ties
pub fn relaxed_match(catalog: &[Talent], filters: &FilterState) -> Option<Talent> {
    let mut best: Option<(&Talent, f64)> = None;
    for (talent, breakdown) in score_all(catalog, filters) {
        let total = breakdown.total();
        match best {
            Some((_, best_total)) if total <= best_total => {}
            _ => best = Some((talent, total)),
        }
    }

    best.map(|(talent, total)| {
        tracing::debug!(id = %talent.id, total, "relaxed match selected");
        talent.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Availability;
    use crate::ranking::test_support::*;

    #[test]
    fn test_empty_catalog() {
        assert!(relaxed_match(&[], &FilterState::new()).is_none());
    }

    #[test]
    fn test_full_marks_without_constraints() {
        let t = talent("a", 4.0, 50.0, &[]);
        let s = score(&t, &FilterState::new());
        assert_eq!(s.total(), 90.0);
        assert_eq!(s.availability, 0.0);
        assert_eq!(s.location, 0.0);
    }

    #[test]
    fn test_partial_rating_credit() {
        let t = talent("a", 4.0, 50.0, &[]);
        let s = score(&t, &FilterState::new().with_min_rating(5.0));
        assert!((s.rating - 32.0).abs() < 1e-9);
    }

    #[test]
    fn test_partial_rate_credit_uses_nearest_bound() {
        // range [40, 80], mid 60, distance to 80 is 15
        let t = talent("a", 4.0, 95.0, &[]);
        let s = score(&t, &FilterState::new().with_rate_range(40.0, 80.0));
        assert!((s.rate - 22.5).abs() < 1e-9);

        let far = talent("b", 4.0, 500.0, &[]);
        assert_eq!(score(&far, &FilterState::new().with_rate_range(40.0, 80.0)).rate, 0.0);
    }

    #[test]
    fn test_zero_mid_range_gives_no_rate_credit() {
        let t = talent("a", 4.0, 30.0, &[]);
        let s = score(&t, &FilterState::new().with_rate_range(0.0, 0.0));
        assert_eq!(s.rate, 0.0);
    }

    #[test]
    fn test_skill_ratio_and_constrained_bonuses() {
        let t = talent("a", 4.0, 50.0, &["Go"]).with_location("Berlin, Germany");
        let filters = FilterState::new()
            .with_skills(["Go", "AWS"])
            .with_availability([Availability::FullTime])
            .with_locations(["Germany"]);
        let s = score(&t, &filters);
        assert_eq!(s.skills, 10.0);
        assert_eq!(s.availability, 5.0);
        assert_eq!(s.location, 5.0);
    }

    #[test]
    fn test_tie_keeps_catalog_order() {
        let catalog = vec![talent("first", 4.0, 50.0, &[]), talent("second", 4.0, 50.0, &[])];
        let best = relaxed_match(&catalog, &FilterState::new().with_min_rating(4.95)).unwrap();
        assert_eq!(best.id, "first");
    }

    #[test]
    fn test_picks_highest_composite() {
        let catalog = vec![
            talent("a", 4.5, 45.0, &[]),
            talent("b", 4.9, 400.0, &[]),
            talent("c", 4.9, 45.0, &[]),
        ];
        let best = relaxed_match(&catalog, &FilterState::new().with_min_rating(4.95)).unwrap();
        assert_eq!(best.id, "c");
    }
}
