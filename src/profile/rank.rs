use std::cmp::Reverse;
use std::collections::HashMap;

use super::types::Skill;

/// Order skills by category tier, then category weight, then name.
///
/// Categories carrying an explicit priority come first (lower value wins);
/// categories without one rank after every category that declares one.
/// Priority ties fall back to category size (larger first), then to
/// case-insensitive skill name. The sort is stable, so entries sharing all
/// three keys keep their source order, making the result deterministic for
/// a given input multiset. Applying it to its own output is a no-op.
pub fn rank(skills: &[Skill]) -> Vec<Skill> {
    if skills.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut min_priority: HashMap<&str, i64> = HashMap::new();
    for skill in skills {
        *counts.entry(skill.category.as_str()).or_insert(0) += 1;
        if let Some(priority) = skill.priority {
            min_priority
                .entry(skill.category.as_str())
                .and_modify(|current| *current = (*current).min(priority))
                .or_insert(priority);
        }
    }

    let mut ranked = skills.to_vec();
    ranked.sort_by_cached_key(|skill| {
        let priority = min_priority.get(skill.category.as_str()).copied();
        (
            priority.is_none(),
            priority.unwrap_or(0),
            Reverse(counts.get(skill.category.as_str()).copied().unwrap_or(0)),
            skill.name.to_lowercase(),
        )
    });
    ranked
}
