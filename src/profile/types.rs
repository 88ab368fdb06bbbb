use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub profile: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub period: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<ProjectLinks>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProjectLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// The validated portfolio document.
///
/// Only `schema::validate` constructs one, so holding a `Portfolio` means
/// every field passed validation and `skills` is already flattened and
/// ranked. Reloads replace the whole document, never individual fields.
#[derive(Debug, Clone, Serialize)]
pub struct Portfolio {
    pub personal: PersonalInfo,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub certifications: Vec<Certification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}
