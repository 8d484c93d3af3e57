//! Visit counter page handler.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::CounterState;

/// Counter page handler.
///
/// Increments the persisted visit count and renders the new value. The value
/// shown is the in-memory one: a failed write still renders the new number.
#[instrument(name = "visits::index", skip(state))]
pub async fn index(State(state): State<CounterState>) -> Result<Html<String>, AppError> {
    let count = state.store.increment();

    let mut context = tera::Context::new();
    context.insert("count", &count);

    let html = state.tera.render("visits.html", &context)?;
    Ok(Html(html))
}
