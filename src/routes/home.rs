//! Landing page handler.

use axum::{extract::State, response::Html};
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::LandingState;

/// Per-request template data for the landing page, built from the process
/// configuration. Never persisted.
#[derive(Debug, Serialize)]
pub struct PageData {
    pub version: String,
    pub environment: String,
}

/// Landing page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<LandingState>) -> Result<Html<String>, AppError> {
    let page = PageData {
        version: state.config.version.clone(),
        environment: state.config.environment.clone(),
    };

    let mut context = tera::Context::new();
    context.insert("page", &page);

    let html = state.tera.render("index.html", &context)?;
    Ok(Html(html))
}
