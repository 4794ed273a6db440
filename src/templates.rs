use tera::Tera;

use crate::config::TEMPLATE_GLOB;
use crate::error::AppError;

/// Initialize the Tera template engine.
///
/// Templates ending in `.html` are auto-escaped, so user-submitted values
/// echoed back in the confirmation page are HTML-safe.
pub fn init_templates() -> Result<Tera, AppError> {
    let tera = Tera::new(TEMPLATE_GLOB)?;
    Ok(tera)
}
