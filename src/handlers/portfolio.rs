use axum::{extract::State, Json};
use std::sync::Arc;

use crate::error::Result;
use crate::profile::{Certification, Education, Experience, Portfolio, Project, Skill};
use crate::state::AppState;

// GET /api/portfolio - Full validated document
pub async fn get_portfolio(State(state): State<Arc<AppState>>) -> Result<Json<Portfolio>> {
    let portfolio = state.profile.load(true).await?;
    Ok(Json((*portfolio).clone()))
}

// GET /api/experience
pub async fn get_experience(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Experience>>> {
    let portfolio = state.profile.load(true).await?;
    Ok(Json(portfolio.experience.clone()))
}

// GET /api/skills - Skills in ranked order
pub async fn get_skills(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Skill>>> {
    let portfolio = state.profile.load(true).await?;
    Ok(Json(portfolio.skills.clone()))
}

// GET /api/education
pub async fn get_education(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Education>>> {
    let portfolio = state.profile.load(true).await?;
    Ok(Json(portfolio.education.clone()))
}

// GET /api/certifications
pub async fn get_certifications(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Certification>>> {
    let portfolio = state.profile.load(true).await?;
    Ok(Json(portfolio.certifications.clone()))
}

// GET /api/projects - Empty list when the document has no projects section
pub async fn get_projects(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Project>>> {
    let portfolio = state.profile.load(true).await?;
    Ok(Json(portfolio.projects.clone().unwrap_or_default()))
}
