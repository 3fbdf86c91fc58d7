//! Shared application state
//!
//! The rules table is loaded before the server starts and never changes, so
//! handlers share it through an `Arc` without locking.

use std::sync::Arc;

use automation_core::Dataset;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
