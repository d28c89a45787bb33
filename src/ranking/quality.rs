use std::cmp::Ordering;

use crate::core::Talent;
use crate::ranking::{into_talents, rank_by_score};

const RATING_WEIGHT: f64 = 0.5;
const PROJECTS_WEIGHT: f64 = 0.3;
const SUCCESS_WEIGHT: f64 = 0.2;

/// Weighted sum of pairwise differences; `Greater` puts `a` after `b`
pub fn compare(a: &Talent, b: &Talent) -> Ordering {
    let rating_delta = b.rating - a.rating;
    let projects_delta = b.completed_projects as f64 - a.completed_projects as f64;
    let success_delta = b.success_rate - a.success_rate;

    let delta =
        RATING_WEIGHT * rating_delta + PROJECTS_WEIGHT * projects_delta + SUCCESS_WEIGHT * success_delta;

    delta.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

/// Scalar form of [`compare`]: sorting by it descending gives the same order
pub fn score(talent: &Talent) -> f64 {
    RATING_WEIGHT * talent.rating
        + PROJECTS_WEIGHT * talent.completed_projects as f64
        + SUCCESS_WEIGHT * talent.success_rate
}

/// Track-record ordering: rating, completed projects and success rate
pub fn rank(candidates: &[Talent]) -> Vec<Talent> {
    into_talents(rank_by_score(candidates, score))
}
