//! Cascade controller: applies a user pick to the [`Selection`] and re-runs
//! the dependent derivations, auto-selecting each derived default the way the
//! dropdowns do.

use serde::Serialize;

use crate::dataset::Dataset;
use crate::derive::{
    derive_config, derive_levels, derive_result_tables, ConfigOptions, LevelOptions, ResultTables,
};
use crate::selection::{Selection, SelectionStage};

/// Everything the presentation needs to render one state of the cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub selection: Selection,
    pub stage: SelectionStage,
    pub levels: LevelOptions,
    pub config: ConfigOptions,
    pub results: ResultTables,
}

pub struct Viewer<'a> {
    dataset: &'a Dataset,
    selection: Selection,
}

impl<'a> Viewer<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            selection: Selection::default(),
        }
    }

    /// Rebuild a cascade from raw picks, replayed upstream first. A level or
    /// configuration that the upstream pick does not offer is replaced by the
    /// derived default.
    pub fn restore(
        dataset: &'a Dataset,
        product: Option<&str>,
        level: Option<&str>,
        config: Option<&str>,
    ) -> Self {
        let mut viewer = Self::new(dataset);
        viewer.apply_product(product.map(str::to_owned));

        if let Some(level) = level {
            let offered = derive_levels(dataset, viewer.selection.product());
            if offered.options.iter().any(|l| l == level) {
                viewer.apply_level(Some(level.to_owned()));
            }
        }

        if let Some(config) = config {
            let offered = derive_config(
                dataset,
                viewer.selection.product(),
                viewer.selection.level(),
            );
            if offered.options.iter().any(|o| o.value == config) {
                viewer.selection.select_config(Some(config.to_owned()));
            }
        }

        viewer
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn choose_product(&mut self, product: Option<String>) -> ViewState {
        self.apply_product(product);
        self.view()
    }

    pub fn choose_level(&mut self, level: Option<String>) -> ViewState {
        self.apply_level(level);
        self.view()
    }

    pub fn choose_config(&mut self, config: Option<String>) -> ViewState {
        self.selection.select_config(config);
        self.view()
    }

    pub fn view(&self) -> ViewState {
        let product = self.selection.product();
        let level = self.selection.level();
        ViewState {
            selection: self.selection.clone(),
            stage: self.selection.stage(),
            levels: derive_levels(self.dataset, product),
            config: derive_config(self.dataset, product, level),
            results: derive_result_tables(self.dataset, product, level, self.selection.config()),
        }
    }

    fn apply_product(&mut self, product: Option<String>) {
        self.selection.select_product(product);
        let levels = derive_levels(self.dataset, self.selection.product());
        self.apply_level(levels.default);
    }

    fn apply_level(&mut self, level: Option<String>) {
        self.selection.select_level(level);
        let configs = derive_config(
            self.dataset,
            self.selection.product(),
            self.selection.level(),
        );
        self.selection.select_config(configs.default);
    }
}
