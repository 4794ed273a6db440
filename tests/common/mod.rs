#![allow(dead_code)]

mod request;

pub use request::*;

use axum::Router;
use rolodex::routes::create_router;
use rolodex::state::AppState;
use rolodex::storage::Storage;
use rolodex::templates::init_templates;

/// Test context holding the app router and its storage handle.
pub struct TestContext {
    pub app: Router,
    pub storage: Storage,
}

impl TestContext {
    /// Build an app backed by a fresh in-memory SQLite database.
    pub async fn new() -> Self {
        let storage = Storage::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to test database");
        storage
            .ensure_schema()
            .await
            .expect("Failed to create schema");

        let tera = init_templates().expect("Failed to load templates");
        let state = AppState::new(tera, storage.clone());

        Self {
            app: create_router(state),
            storage,
        }
    }

    /// Close the storage connection, simulating a dropped database.
    pub async fn drop_storage(&self) {
        self.storage
            .clone()
            .close()
            .await
            .expect("Failed to close test database");
    }
}
