//! GET /api/*: the selection cascade as JSON.
//!
//! Selections arrive as query parameters. A missing or empty parameter means
//! "not selected"; none of these endpoints fail on a selection.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use automation_core::{
    derive_config, derive_levels, derive_result_tables, ConfigOptions, LevelOptions,
    ResultTables, ViewState, Viewer,
};

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub product: Option<String>,
    pub level: Option<String>,
    pub config: Option<String>,
}

impl SelectionQuery {
    pub fn product(&self) -> Option<&str> {
        non_empty(&self.product)
    }

    pub fn level(&self) -> Option<&str> {
        non_empty(&self.level)
    }

    pub fn config(&self) -> Option<&str> {
        non_empty(&self.config)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub async fn list_products(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(
        state
            .dataset
            .products()
            .into_iter()
            .map(str::to_owned)
            .collect(),
    )
}

pub async fn levels(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Json<LevelOptions> {
    Json(derive_levels(&state.dataset, query.product()))
}

pub async fn configs(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Json<ConfigOptions> {
    Json(derive_config(&state.dataset, query.product(), query.level()))
}

pub async fn results(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Json<ResultTables> {
    Json(derive_result_tables(
        &state.dataset,
        query.product(),
        query.level(),
        query.config(),
    ))
}

/// Whole cascade in one call, with stale downstream picks replaced by defaults.
pub async fn view(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Json<ViewState> {
    let viewer = Viewer::restore(&state.dataset, query.product(), query.level(), query.config());
    Json(viewer.view())
}
