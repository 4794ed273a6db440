use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Errors surfaced to HTTP clients.
///
/// Two kinds reach clients: invalid form input (400 with an HTML fragment)
/// and storage failures (500 with a plain-text body). Template failures are
/// internal and collapse into a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing or empty required field")]
    Validation,

    #[error("storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),

    #[error("template rendering error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Validation => {
                let body = r#"<p>All fields are required. <a href="/">Go back</a></p>"#;
                (StatusCode::BAD_REQUEST, Html(body)).into_response()
            }
            AppError::Storage(_) => {
                tracing::error!("Storage error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error").into_response()
            }
            AppError::Template(_) => {
                tracing::error!("Internal error: {:?}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
