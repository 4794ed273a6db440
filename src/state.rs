//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::storage::Storage;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the Tera template engine and the storage handle owning the
/// database connection.
#[derive(Clone)]
pub struct AppState {
    pub tera: Arc<Tera>,
    pub storage: Storage,
}

impl AppState {
    /// Creates a new application state from the given templates and storage handle.
    pub fn new(tera: Tera, storage: Storage) -> Self {
        Self {
            tera: Arc::new(tera),
            storage,
        }
    }
}
