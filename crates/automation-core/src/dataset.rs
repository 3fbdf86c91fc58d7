//! Immutable in-memory rules table.

use std::collections::HashSet;
use std::hash::Hash;

use crate::row::Row;

/// The loaded rules table. Built once, read by every derivation.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct products in first-seen order.
    pub fn products(&self) -> Vec<&str> {
        distinct_in_order(self.rows.iter().map(|r| r.product.as_str()))
    }

    /// Rows of one product, in table order.
    pub fn rows_for_product<'a>(
        &'a self,
        product: &'a str,
    ) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows.iter().filter(move |r| r.product == product)
    }

    /// Distinct levels reachable by `product`, in first-seen order.
    pub fn levels_for(&self, product: &str) -> Vec<&str> {
        distinct_in_order(
            self.rows
                .iter()
                .filter(|r| r.product == product)
                .filter_map(|r| r.level.as_deref()),
        )
    }

    /// Distinct configuration identifiers for a (product, level) pair, in first-seen order.
    pub fn configs_for(&self, product: &str, level: &str) -> Vec<&str> {
        distinct_in_order(
            self.rows
                .iter()
                .filter(|r| r.product == product && r.level.as_deref() == Some(level))
                .filter_map(|r| r.mapping_logic.as_deref()),
        )
    }

    /// First row (table order) carrying the given product and configuration.
    pub fn find_config_row(&self, product: &str, config: &str) -> Option<&Row> {
        self.rows
            .iter()
            .find(|r| r.product == product && r.mapping_logic.as_deref() == Some(config))
    }

    /// Feature-bearing rows of `product` whose feature level is MANUAL.
    pub fn manual_feature_rows<'a>(
        &'a self,
        product: &'a str,
    ) -> impl Iterator<Item = &'a Row> + 'a {
        self.rows_for_product(product).filter(|r| r.is_manual_feature())
    }
}

/// Deduplicate while keeping the first occurrence of each item.
pub(crate) fn distinct_in_order<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
