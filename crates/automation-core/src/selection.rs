//! The three nested user selections and their reset rules.
//!
//! Picking an upstream value always clears everything downstream of it, so a
//! stale level or configuration can never survive a product change.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    NoProduct,
    ProductChosen,
    LevelChosen,
    ConfigChosen,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    product: Option<String>,
    level: Option<String>,
    config: Option<String>,
}

impl Selection {
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn level(&self) -> Option<&str> {
        self.level.as_deref()
    }

    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Picks a product; level and configuration are cleared.
    pub fn select_product(&mut self, product: Option<String>) {
        self.product = product;
        self.level = None;
        self.config = None;
    }

    /// Picks a level; the configuration is cleared.
    pub fn select_level(&mut self, level: Option<String>) {
        self.level = level;
        self.config = None;
    }

    pub fn select_config(&mut self, config: Option<String>) {
        self.config = config;
    }

    pub fn stage(&self) -> SelectionStage {
        match (&self.product, &self.level, &self.config) {
            (None, _, _) => SelectionStage::NoProduct,
            (Some(_), None, _) => SelectionStage::ProductChosen,
            (Some(_), Some(_), None) => SelectionStage::LevelChosen,
            (Some(_), Some(_), Some(_)) => SelectionStage::ConfigChosen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fully_selected() -> Selection {
        let mut s = Selection::default();
        s.select_product(Some("P1".into()));
        s.select_level(Some("AUTO".into()));
        s.select_config(Some("CFG1".into()));
        s
    }

    #[test]
    fn forward_transitions() {
        let mut s = Selection::default();
        assert_eq!(s.stage(), SelectionStage::NoProduct);
        s.select_product(Some("P1".into()));
        assert_eq!(s.stage(), SelectionStage::ProductChosen);
        s.select_level(Some("AUTO".into()));
        assert_eq!(s.stage(), SelectionStage::LevelChosen);
        s.select_config(Some("CFG1".into()));
        assert_eq!(s.stage(), SelectionStage::ConfigChosen);
    }

    #[test]
    fn product_change_resets_level_and_config() {
        let mut s = fully_selected();
        s.select_product(Some("P2".into()));
        assert_eq!(s.product(), Some("P2"));
        assert_eq!(s.level(), None);
        assert_eq!(s.config(), None);
    }

    #[test]
    fn reselecting_same_product_still_resets() {
        let mut s = fully_selected();
        s.select_product(Some("P1".into()));
        assert_eq!(s.stage(), SelectionStage::ProductChosen);
    }

    #[test]
    fn level_change_resets_config_only() {
        let mut s = fully_selected();
        s.select_level(Some("MANUAL".into()));
        assert_eq!(s.product(), Some("P1"));
        assert_eq!(s.level(), Some("MANUAL"));
        assert_eq!(s.config(), None);
    }

    #[test]
    fn clearing_product_returns_to_start() {
        let mut s = fully_selected();
        s.select_product(None);
        assert_eq!(s, Selection::default());
    }
}
