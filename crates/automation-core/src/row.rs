//! One record of the automation rules table.

use serde::{Deserialize, Serialize};

/// Number of indexed (name, value) pair columns per group.
pub const PAIR_COUNT: usize = 7;

/// Level that triggers the feature-condition panel.
pub const MANUAL_LEVEL: &str = "MANUAL";

/// A named attribute and its value, as shown in the result tables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldValue {
    pub field: String,
    pub value: String,
}

impl FieldValue {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// A flat row of the rules sheet.
///
/// `product` is always present. A row without `level` or `mapping_logic` is
/// never offered as a level or configuration but still feeds the product's
/// feature panel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub product: String,
    pub level: Option<String>,
    pub mapping_logic: Option<String>,
    pub fields: [Option<String>; PAIR_COUNT],
    pub values: [Option<String>; PAIR_COUNT],
    pub feature_level: Option<String>,
    pub feature_id: Option<String>,
    pub feature_fields: [Option<String>; PAIR_COUNT],
    pub feature_values: [Option<String>; PAIR_COUNT],
}

impl Row {
    pub fn new(
        product: impl Into<String>,
        level: impl Into<String>,
        mapping_logic: impl Into<String>,
    ) -> Self {
        Self {
            product: product.into(),
            level: Some(level.into()),
            mapping_logic: Some(mapping_logic.into()),
            ..Self::default()
        }
    }

    /// A row carrying only a product, as left by a feature-only sheet line.
    pub fn for_product(product: impl Into<String>) -> Self {
        Self {
            product: product.into(),
            ..Self::default()
        }
    }

    /// Sets configuration pair `index` (1-based, like the sheet headers).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 or greater than [`PAIR_COUNT`].
    pub fn with_field(mut self, index: usize, field: &str, value: &str) -> Self {
        self.fields[index - 1] = Some(field.to_string());
        self.values[index - 1] = Some(value.to_string());
        self
    }

    /// Marks the row as feature-bearing at the given feature level.
    pub fn with_feature(mut self, feature_id: &str, feature_level: &str) -> Self {
        self.feature_id = Some(feature_id.to_string());
        self.feature_level = Some(feature_level.to_string());
        self
    }

    /// Sets feature condition pair `index` (1-based).
    ///
    /// # Panics
    ///
    /// Panics if `index` is 0 or greater than [`PAIR_COUNT`].
    pub fn with_feature_field(mut self, index: usize, field: &str, value: &str) -> Self {
        self.feature_fields[index - 1] = Some(field.to_string());
        self.feature_values[index - 1] = Some(value.to_string());
        self
    }

    /// Configuration pairs where both name and value are present, in index order.
    pub fn field_values(&self) -> impl Iterator<Item = FieldValue> + '_ {
        present_pairs(&self.fields, &self.values)
    }

    /// Feature condition pairs where both name and value are present, in index order.
    pub fn feature_conditions(&self) -> impl Iterator<Item = FieldValue> + '_ {
        present_pairs(&self.feature_fields, &self.feature_values)
    }

    /// Whether this row contributes to the MANUAL feature panel.
    pub fn is_manual_feature(&self) -> bool {
        self.feature_id.is_some() && self.feature_level.as_deref() == Some(MANUAL_LEVEL)
    }
}

fn present_pairs<'a>(
    names: &'a [Option<String>; PAIR_COUNT],
    values: &'a [Option<String>; PAIR_COUNT],
) -> impl Iterator<Item = FieldValue> + 'a {
    names
        .iter()
        .zip(values.iter())
        .filter_map(|(name, value)| match (name, value) {
            (Some(name), Some(value)) => Some(FieldValue::new(name.as_str(), value.as_str())),
            _ => None,
        })
}
