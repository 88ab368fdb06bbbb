use serde_yaml::Value;

use super::error::ProfileError;
use super::schema::{join, opt_int, req_str, require_mapping};
use super::types::Skill;

/// One category group from the canonical grouped skills format.
#[derive(Debug, Clone)]
pub struct SkillGroup {
    pub category: String,
    pub values: Vec<String>,
    pub priority: Option<i64>,
}

/// The two accepted shapes of the `skills` section, resolved once before
/// flattening. Grouped is the canonical shape; `Flat` accepts documents
/// written against the older per-entry schema.
#[derive(Debug, Clone)]
pub enum SkillsInput {
    Grouped(Vec<SkillGroup>),
    Flat(Vec<Skill>),
}

/// Flatten the raw `skills` section into the canonical flat list.
///
/// Pure with respect to its input; the caller owns the returned list.
pub fn normalize(section: &[Value]) -> Result<Vec<Skill>, ProfileError> {
    Ok(match detect(section)? {
        SkillsInput::Grouped(groups) => flatten(groups),
        SkillsInput::Flat(skills) => skills,
    })
}

/// Resolve the skills section into grouped or flat form.
///
/// A `values` key anywhere signals grouped form, a `name` key signals flat
/// form. Both signals in one sequence is ambiguous and rejected; neither
/// signal on a non-empty sequence means the grouped shape was intended but
/// malformed.
pub fn detect(section: &[Value]) -> Result<SkillsInput, ProfileError> {
    if section.is_empty() {
        return Ok(SkillsInput::Flat(Vec::new()));
    }

    let has_values = section.iter().any(|item| item.get("values").is_some());
    let has_names = section.iter().any(|item| item.get("name").is_some());

    if has_values && has_names {
        return Err(ProfileError::schema(
            "skills",
            "must not mix grouped and flat formats",
        ));
    }
    if has_values {
        return Ok(SkillsInput::Grouped(parse_groups(section)?));
    }
    if has_names {
        return Ok(SkillsInput::Flat(parse_flat(section)?));
    }

    Err(ProfileError::schema(
        "skills",
        "each entry must carry 'values' (grouped format) or 'name' (flat format)",
    ))
}

fn parse_groups(section: &[Value]) -> Result<Vec<SkillGroup>, ProfileError> {
    section
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("skills[{i}]");
            require_mapping(item, &path)?;

            let values_path = join(&path, "values");
            let values = item
                .get("values")
                .and_then(Value::as_sequence)
                .ok_or_else(|| {
                    ProfileError::schema(&values_path, "must be a sequence of strings")
                })?;
            if values.is_empty() {
                return Err(ProfileError::schema(&values_path, "must not be empty"));
            }
            let values = values
                .iter()
                .enumerate()
                .map(|(j, v)| match v.as_str() {
                    Some(s) if !s.is_empty() => Ok(s.to_string()),
                    _ => Err(ProfileError::schema(
                        format!("{values_path}[{j}]"),
                        "must be a non-empty string",
                    )),
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(SkillGroup {
                category: req_str(item, &path, "category")?,
                values,
                priority: opt_int(item, &path, "priority")?,
            })
        })
        .collect()
}

fn parse_flat(section: &[Value]) -> Result<Vec<Skill>, ProfileError> {
    section
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("skills[{i}]");
            require_mapping(item, &path)?;

            Ok(Skill {
                name: req_str(item, &path, "name")?,
                category: req_str(item, &path, "category")?,
                priority: opt_int(item, &path, "priority")?,
            })
        })
        .collect()
}

fn flatten(groups: Vec<SkillGroup>) -> Vec<Skill> {
    groups
        .into_iter()
        .flat_map(|group| {
            let category = group.category;
            let priority = group.priority;
            group.values.into_iter().map(move |name| Skill {
                name,
                category: category.clone(),
                priority,
            })
        })
        .collect()
}
