use serde_yaml::Value;

use super::error::ProfileError;
use super::normalize;
use super::rank;
use super::types::{
    Certification, Education, Experience, PersonalInfo, Portfolio, Project, ProjectLinks,
};

/// Validate a parsed YAML document and build the portfolio.
///
/// The `skills` section is normalized to the flat form before field-level
/// checks run, and the assembled skill list is ranked before the document is
/// returned. Unknown keys are ignored so newer documents keep loading on
/// older builds.
pub fn validate(doc: &Value) -> Result<Portfolio, ProfileError> {
    if !doc.is_mapping() {
        return Err(ProfileError::schema("document", "must be a mapping"));
    }

    let skills = match doc.get("skills") {
        Some(section) => {
            let seq = section
                .as_sequence()
                .ok_or_else(|| ProfileError::schema("skills", "must be a sequence"))?;
            normalize::normalize(seq)?
        }
        None => return Err(missing("skills")),
    };

    Ok(Portfolio {
        personal: personal_info(doc)?,
        experience: experience_entries(doc)?,
        education: education_entries(doc)?,
        skills: rank::rank(&skills),
        certifications: certification_entries(doc)?,
        projects: project_entries(doc)?,
    })
}

fn personal_info(doc: &Value) -> Result<PersonalInfo, ProfileError> {
    let section = doc.get("personal").ok_or_else(|| missing("personal"))?;
    require_mapping(section, "personal")?;

    Ok(PersonalInfo {
        name: req_str(section, "personal", "name")?,
        title: req_str(section, "personal", "title")?,
        location: req_str(section, "personal", "location")?,
        summary: req_str(section, "personal", "summary")?,
        email: req_str(section, "personal", "email")?,
        linkedin: req_str(section, "personal", "linkedin")?,
        github: req_str(section, "personal", "github")?,
        profile: req_str(section, "personal", "profile")?,
        contact: opt_str(section, "personal", "contact")?,
    })
}

fn experience_entries(doc: &Value) -> Result<Vec<Experience>, ProfileError> {
    req_seq(doc, "", "experience")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("experience[{i}]");
            require_mapping(item, &path)?;

            Ok(Experience {
                company: req_str(item, &path, "company")?,
                position: req_str(item, &path, "position")?,
                duration: req_str(item, &path, "duration")?,
                location: req_str(item, &path, "location")?,
                period: req_str(item, &path, "period")?,
                achievements: str_items(
                    req_seq(item, &path, "achievements")?,
                    &join(&path, "achievements"),
                )?,
            })
        })
        .collect()
}

fn education_entries(doc: &Value) -> Result<Vec<Education>, ProfileError> {
    req_seq(doc, "", "education")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("education[{i}]");
            require_mapping(item, &path)?;

            Ok(Education {
                institution: req_str(item, &path, "institution")?,
                degree: req_str(item, &path, "degree")?,
                period: req_str(item, &path, "period")?,
                location: req_str(item, &path, "location")?,
            })
        })
        .collect()
}

fn certification_entries(doc: &Value) -> Result<Vec<Certification>, ProfileError> {
    req_seq(doc, "", "certifications")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("certifications[{i}]");
            require_mapping(item, &path)?;

            Ok(Certification {
                name: req_str(item, &path, "name")?,
                issuer: req_str(item, &path, "issuer")?,
            })
        })
        .collect()
}

fn project_entries(doc: &Value) -> Result<Option<Vec<Project>>, ProfileError> {
    let Some(section) = doc.get("projects") else {
        return Ok(None);
    };
    let seq = section
        .as_sequence()
        .ok_or_else(|| ProfileError::schema("projects", "must be a sequence"))?;

    let projects = seq
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let path = format!("projects[{i}]");
            require_mapping(item, &path)?;

            Ok(Project {
                name: req_str(item, &path, "name")?,
                description: req_str(item, &path, "description")?,
                technologies: str_items(
                    req_seq(item, &path, "technologies")?,
                    &join(&path, "technologies"),
                )?,
                links: project_links(item, &path)?,
            })
        })
        .collect::<Result<Vec<_>, ProfileError>>()?;

    Ok(Some(projects))
}

fn project_links(item: &Value, path: &str) -> Result<Option<ProjectLinks>, ProfileError> {
    let Some(links) = item.get("links") else {
        return Ok(None);
    };
    let links_path = join(path, "links");
    require_mapping(links, &links_path)?;

    Ok(Some(ProjectLinks {
        source: opt_str(links, &links_path, "source")?,
        package: opt_str(links, &links_path, "package")?,
        image: opt_str(links, &links_path, "image")?,
    }))
}

// Field helpers shared with the skills normalizer. Every failure carries the
// full dotted path of the offending field.

pub(super) fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn missing(field: &str) -> ProfileError {
    ProfileError::schema(field, "missing required field")
}

pub(super) fn require_mapping(value: &Value, path: &str) -> Result<(), ProfileError> {
    if value.is_mapping() {
        Ok(())
    } else {
        Err(ProfileError::schema(path, "must be a mapping"))
    }
}

pub(super) fn req_str(item: &Value, path: &str, key: &str) -> Result<String, ProfileError> {
    let field = join(path, key);
    let value = item.get(key).ok_or_else(|| missing(&field))?;
    let s = value
        .as_str()
        .ok_or_else(|| ProfileError::schema(&field, "must be a string"))?;
    if s.is_empty() {
        return Err(ProfileError::schema(&field, "must not be empty"));
    }
    Ok(s.to_string())
}

pub(super) fn opt_str(
    item: &Value,
    path: &str,
    key: &str,
) -> Result<Option<String>, ProfileError> {
    match item.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| ProfileError::schema(join(path, key), "must be a string")),
    }
}

pub(super) fn opt_int(item: &Value, path: &str, key: &str) -> Result<Option<i64>, ProfileError> {
    match item.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_i64()
            .map(Some)
            .ok_or_else(|| ProfileError::schema(join(path, key), "must be an integer")),
    }
}

pub(super) fn req_seq<'a>(
    item: &'a Value,
    path: &str,
    key: &str,
) -> Result<&'a [Value], ProfileError> {
    let field = join(path, key);
    let value = item.get(key).ok_or_else(|| missing(&field))?;
    value
        .as_sequence()
        .map(Vec::as_slice)
        .ok_or_else(|| ProfileError::schema(&field, "must be a sequence"))
}

pub(super) fn str_items(seq: &[Value], path: &str) -> Result<Vec<String>, ProfileError> {
    seq.iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| ProfileError::schema(format!("{path}[{i}]"), "must be a string"))
        })
        .collect()
}
