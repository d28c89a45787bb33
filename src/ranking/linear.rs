use crate::core::{FilterState, Talent};
use crate::ranking::{into_talents, rank_by_score, skill_match_ratio};

const SKILL_WEIGHT: f64 = 0.4;
const RATING_WEIGHT: f64 = 0.3;
const SUCCESS_WEIGHT: f64 = 0.2;
const PRICE_WEIGHT: f64 = 0.1;

/// Rates above this push the price term negative
const PRICE_CEILING: f64 = 200.0;

pub fn score(talent: &Talent, filters: &FilterState) -> f64 {
    let skill = skill_match_ratio(talent, filters).unwrap_or(0.0);
    let rating = talent.rating / 5.0;
    let success = talent.success_rate / 100.0;
    let price = 1.0 - talent.hourly_rate / PRICE_CEILING;

    SKILL_WEIGHT * skill + RATING_WEIGHT * rating + SUCCESS_WEIGHT * success + PRICE_WEIGHT * price
}

pub fn rank(candidates: &[Talent], filters: &FilterState) -> Vec<Talent> {
    into_talents(rank_by_score(candidates, |t| score(t, filters)))
}
