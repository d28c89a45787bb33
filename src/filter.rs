//! Hard-constraint predicates over a single candidate.
//!
//! Two filters coexist and intentionally disagree on skills:
//! - [`matches_strict`] ignores skills entirely. It decides whether the
//!   relaxed-match fallback runs and feeds every ranking strategy.
//! - [`matches_display`] additionally requires at least one requested skill.
//!   It backs the unranked "best" display mode only.

use crate::core::{FilterState, Talent};

pub fn rate_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.rate_in_range(talent.hourly_rate)
}

pub fn availability_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.availability.is_empty() || filters.availability.contains(&talent.availability)
}

pub fn rating_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.min_rating == 0.0 || talent.rating >= filters.min_rating
}

/// Case-sensitive substring containment, any entry
pub fn location_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.location.is_empty()
        || filters
            .location
            .iter()
            .any(|loc| talent.location.contains(loc.as_str()))
}

pub fn languages_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.languages.is_empty() || filters.languages.iter().any(|l| talent.speaks(l))
}

/// Rate, availability, rating, location and languages. No skill check.
pub fn matches_strict(talent: &Talent, filters: &FilterState) -> bool {
    rate_ok(talent, filters)
        && availability_ok(talent, filters)
        && rating_ok(talent, filters)
        && location_ok(talent, filters)
        && languages_ok(talent, filters)
}

/// At least one requested skill present (OR), or no skills requested
pub fn any_skill_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.skills.is_empty() || filters.skills.iter().any(|s| talent.has_skill(s))
}

/// Every requested skill present (AND), or no skills requested
pub fn all_skills_ok(talent: &Talent, filters: &FilterState) -> bool {
    filters.skills.iter().all(|s| talent.has_skill(s))
}

/// Filter used for the unranked display list
pub fn matches_display(talent: &Talent, filters: &FilterState) -> bool {
    any_skill_ok(talent, filters) && matches_strict(talent, filters)
}

/// Case-insensitive free-text search over name, title, skills and description
pub fn matches_query(talent: &Talent, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    talent.name.to_lowercase().contains(&query)
        || talent.title.to_lowercase().contains(&query)
        || talent.skills.iter().any(|s| s.to_lowercase().contains(&query))
        || talent.description.to_lowercase().contains(&query)
}

/// Strict-filtered subset, catalog order preserved
pub fn strict_filter(catalog: &[Talent], filters: &FilterState) -> Vec<Talent> {
    catalog
        .iter()
        .filter(|t| matches_strict(t, filters))
        .cloned()
        .collect()
}

/// Display-filtered subset, catalog order preserved
pub fn display_filter(catalog: &[Talent], filters: &FilterState) -> Vec<Talent> {
    catalog
        .iter()
        .filter(|t| matches_display(t, filters))
        .cloned()
        .collect()
}
