//! Skill-aware ranking that caps the advantage of heavily booked freelancers.

use crate::core::{FilterState, Talent};
use crate::ranking::{into_talents, rank_by_score, skill_match_ratio};

const RELEVANCE_WEIGHT: f64 = 0.7;
const FAIRNESS_WEIGHT: f64 = 0.2;
const DIVERSITY_WEIGHT: f64 = 0.1;

/// Project count at which the fairness term reaches zero
const EXPOSURE_CAP: f64 = 100.0;

/// `1 - min(projects / 100, 1)`: newer freelancers score higher
pub fn fairness(talent: &Talent) -> f64 {
    1.0 - (talent.completed_projects as f64 / EXPOSURE_CAP).min(1.0)
}

pub fn diversity(talent: &Talent) -> f64 {
    talent.skills.len() as f64 / 10.0
}

pub fn score(talent: &Talent, filters: &FilterState) -> f64 {
    let relevance = skill_match_ratio(talent, filters).unwrap_or(1.0);
    RELEVANCE_WEIGHT * relevance + FAIRNESS_WEIGHT * fairness(talent) + DIVERSITY_WEIGHT * diversity(talent)
}

pub fn rank(candidates: &[Talent], filters: &FilterState) -> Vec<Talent> {
    into_talents(rank_by_score(candidates, |t| score(t, filters)))
}
