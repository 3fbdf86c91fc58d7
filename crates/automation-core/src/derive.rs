//! Selection-driven derivations, pure reads over the [`Dataset`].
//!
//! Each function maps the current selections to the options of the next
//! dropdown or to the rows of the result panels. Unselected or unknown
//! inputs never fail: they produce empty options and hidden panels.

use serde::Serialize;

use crate::dataset::{distinct_in_order, Dataset};
use crate::row::{FieldValue, MANUAL_LEVEL};

// ── Levels ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LevelOptions {
    pub options: Vec<String>,
    pub default: Option<String>,
}

/// Distinct levels of `product` in first-seen order; the first is the default.
pub fn derive_levels(dataset: &Dataset, product: Option<&str>) -> LevelOptions {
    let Some(product) = product else {
        return LevelOptions::default();
    };
    let options: Vec<String> = dataset
        .levels_for(product)
        .into_iter()
        .map(str::to_owned)
        .collect();
    let default = options.first().cloned();
    LevelOptions { options, default }
}

// ── Configurations ────────────────────────────────────────────

/// A configuration choice. `value` is the underlying identifier and is never
/// used as the visible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfigOptions {
    /// Sentence naming every level the product can reach; `None` hides the panel.
    pub description: Option<String>,
    pub options: Vec<ConfigOption>,
    pub default: Option<String>,
}

pub fn derive_config(
    dataset: &Dataset,
    product: Option<&str>,
    level: Option<&str>,
) -> ConfigOptions {
    let (Some(product), Some(level)) = (product, level) else {
        return ConfigOptions::default();
    };

    let options: Vec<ConfigOption> = dataset
        .configs_for(product, level)
        .into_iter()
        .enumerate()
        .map(|(i, value)| ConfigOption {
            label: format!("Configuration {}", i + 1),
            value: value.to_owned(),
        })
        .collect();
    if options.is_empty() {
        return ConfigOptions::default();
    }

    let levels = dataset.levels_for(product);
    let description = (!levels.is_empty())
        .then(|| format!("Product {} can reach levels: {}.", product, levels.join(", ")));
    let default = options.first().map(|o| o.value.clone());

    ConfigOptions {
        description,
        options,
        default,
    }
}

// ── Result tables ─────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultTables {
    pub visible: bool,
    pub field_value_rows: Vec<FieldValue>,
    pub feature_rows: Vec<FieldValue>,
    pub feature_panel_visible: bool,
}

impl ResultTables {
    /// The terminal "nothing selected" state.
    pub fn hidden() -> Self {
        Self::default()
    }
}

pub fn derive_result_tables(
    dataset: &Dataset,
    product: Option<&str>,
    level: Option<&str>,
    config: Option<&str>,
) -> ResultTables {
    let (Some(product), Some(config)) = (product, config) else {
        return ResultTables::hidden();
    };

    let Some(row) = dataset.find_config_row(product, config) else {
        // Only reachable when the caller's selection drifted from the options
        // this module produced.
        tracing::warn!(product, config, "no row for selected configuration");
        return ResultTables::hidden();
    };

    let field_value_rows: Vec<FieldValue> = row.field_values().collect();

    let (feature_rows, feature_panel_visible) = if level == Some(MANUAL_LEVEL) {
        let pairs = distinct_in_order(
            dataset
                .manual_feature_rows(product)
                .flat_map(|r| r.feature_conditions()),
        );
        (pairs, true)
    } else {
        (Vec::new(), false)
    };

    ResultTables {
        visible: true,
        field_value_rows,
        feature_rows,
        feature_panel_visible,
    }
}
