use crate::core::{FilterState, Talent};
use crate::filter::all_skills_ok;
use crate::ranking::{into_talents, rank_by_score};

/// Keep candidates holding every requested skill, most matches first.
///
/// Without requested skills this is a passthrough.
pub fn rank(candidates: &[Talent], filters: &FilterState) -> Vec<Talent> {
    let eligible: Vec<Talent> = candidates
        .iter()
        .filter(|t| all_skills_ok(t, filters))
        .cloned()
        .collect();

    into_talents(rank_by_score(&eligible, |t| {
        t.matched_skill_count(&filters.skills) as f64
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::test_support::*;

    #[test]
    fn test_passthrough_without_skills() {
        let candidates = vec![
            talent("a", 4.1, 50.0, &["Go"]),
            talent("b", 4.9, 90.0, &["React", "Node.js"]),
        ];
        let ranked = rank(&candidates, &FilterState::new());
        assert_eq!(ids(&ranked), vec!["a", "b"]);
    }

    #[test]
    fn test_requires_superset() {
        let candidates = vec![
            talent("a", 4.1, 50.0, &["Go"]),
            talent("b", 4.9, 90.0, &["Go", "AWS", "Docker"]),
            talent("c", 4.5, 70.0, &["AWS", "Go"]),
        ];
        let filters = FilterState::new().with_skills(["Go", "AWS"]);
        let ranked = rank(&candidates, &filters);
        assert_eq!(ids(&ranked), vec!["b", "c"]);
    }
}
