use crate::core::Talent;
use crate::ranking::{into_talents, rank_by_score};

/// Mean hourly rate of the slice, `None` when empty
pub fn mean_rate(candidates: &[Talent]) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }
    Some(candidates.iter().map(|t| t.hourly_rate).sum::<f64>() / candidates.len() as f64)
}

/// `1 - |rate - mean| / 100 + skills / 10`
pub fn score(talent: &Talent, mean: f64) -> f64 {
    let rate_score = 1.0 - (talent.hourly_rate - mean).abs() / 100.0;
    let skill_score = talent.skills.len() as f64 / 10.0;
    rate_score + skill_score
}

/// Favour candidates priced near the group mean with broad skill sets
pub fn rank(candidates: &[Talent]) -> Vec<Talent> {
    let Some(mean) = mean_rate(candidates) else {
        return Vec::new();
    };
    into_talents(rank_by_score(candidates, |t| score(t, mean)))
}
