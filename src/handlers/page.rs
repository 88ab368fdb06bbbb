use axum::{extract::State, response::Html};
use std::sync::Arc;
use tera::Context;

use crate::error::{AppError, Result};
use crate::state::AppState;

// GET / - Rendered portfolio page
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let portfolio = state.profile.load(true).await?;

    let mut context = Context::new();
    context.insert("portfolio", &*portfolio);

    let page = state
        .templates
        .render("index.html", &context)
        .map_err(|e| AppError::Internal(format!("Failed to render page: {e}")))?;

    Ok(Html(page))
}
