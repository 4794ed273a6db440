//! Landing page handler.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Landing page with the profile form.
///
/// Rendered unconditionally; storage state never affects this route.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = state.tera.render("index.html", &tera::Context::new())?;
    Ok(Html(html))
}
