//! Product automation rules viewer core.
//!
//! A [`Dataset`] is loaded once from the rules sheet and then only read. The
//! [`derive`] functions turn the nested product → level → configuration
//! [`Selection`] into dropdown options and result rows; [`Viewer`] chains
//! them the way the UI cascade does.

pub mod columns;
pub mod dataset;
pub mod derive;
pub mod error;
pub mod loader;
pub mod row;
pub mod selection;
pub mod view;

pub use columns::ColumnMapping;
pub use dataset::Dataset;
pub use derive::{
    derive_config, derive_levels, derive_result_tables, ConfigOption, ConfigOptions, LevelOptions,
    ResultTables,
};
pub use error::DatasetError;
pub use loader::{load_dataset, SourceConfig, SourceFormat, DEFAULT_SHEET};
pub use row::{FieldValue, Row, MANUAL_LEVEL, PAIR_COUNT};
pub use selection::{Selection, SelectionStage};
pub use view::{ViewState, Viewer};
