//! Handler for profile form submissions.
//!
//! Validates the three required fields, inserts the profile, and renders a
//! confirmation page echoing the stored row.

use axum::{extract::State, response::Html};
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::extract::FormOrJson;
use crate::state::AppState;

/// Form data for submitting a profile.
///
/// Every field is optional at the deserialization layer so that a missing
/// field surfaces as a validation error instead of a generic rejection.
#[derive(Debug, Deserialize)]
pub struct ProfileForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub profession: Option<String>,
}

/// Validate the submitted fields, returning them when all are present.
///
/// Empty or whitespace-only strings and a zero age count as absent.
fn validate(form: ProfileForm) -> Result<(String, i32, String), AppError> {
    let name = form
        .name
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let profession = form
        .profession
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());
    let age = form.age.filter(|age| *age != 0);

    match (name, age, profession) {
        (Some(name), Some(age), Some(profession)) => Ok((name, age, profession)),
        _ => Err(AppError::Validation),
    }
}

/// Handler for submitting a new profile.
#[instrument(name = "submit::submit", skip(state, form))]
pub async fn submit(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<ProfileForm>,
) -> Result<Html<String>, AppError> {
    let (name, age, profession) = validate(form)?;

    let saved = state.storage.insert_profile(name, age, profession).await?;
    tracing::info!(id = saved.id, "Profile saved");

    let mut context = tera::Context::new();
    context.insert("profile", &saved);
    let html = state.tera.render("saved.html", &context)?;
    Ok(Html(html))
}
