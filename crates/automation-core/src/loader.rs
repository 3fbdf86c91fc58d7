//! Rules table loader.
//!
//! Reads the named sheet of a workbook (xlsx, xlsm, xlsb, xls, ods) or a CSV
//! file, maps its header row through a [`ColumnMapping`] and produces the
//! immutable [`Dataset`]. Rows without a product are skipped with a warning;
//! rows that lack only level or mapping logic are kept for the feature panel.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Reader};

use crate::columns::ColumnMapping;
use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::row::{Row, PAIR_COUNT};

pub const DEFAULT_SHEET: &str = "Condiciones Nivel de Automatiza";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Workbook,
    Csv,
}

impl SourceFormat {
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("xlsx" | "xlsm" | "xlsb" | "xls" | "ods") => Ok(Self::Workbook),
            Some("csv") => Ok(Self::Csv),
            _ => Err(DatasetError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Where the rules table lives and how its columns are named.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub path: PathBuf,
    /// Sheet to read; ignored for CSV sources.
    pub sheet: String,
    pub columns: ColumnMapping,
}

impl SourceConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: DEFAULT_SHEET.to_string(),
            columns: ColumnMapping::default(),
        }
    }

    pub fn with_sheet(mut self, sheet: impl Into<String>) -> Self {
        self.sheet = sheet.into();
        self
    }

    pub fn with_columns(mut self, columns: ColumnMapping) -> Self {
        self.columns = columns;
        self
    }
}

/// Load the whole table. Any failure here is fatal for the caller.
pub fn load_dataset(source: &SourceConfig) -> Result<Dataset, DatasetError> {
    if !source.path.is_file() {
        return Err(DatasetError::MissingSource {
            path: source.path.clone(),
        });
    }

    let (header, records) = match SourceFormat::from_path(&source.path)? {
        SourceFormat::Workbook => read_workbook(&source.path, &source.sheet)?,
        SourceFormat::Csv => read_csv(&source.path)?,
    };

    let rows = rows_from_table(&header, records, &source.columns)?;
    let dataset = Dataset::from_rows(rows);
    tracing::info!(
        path = %source.path.display(),
        rows = dataset.len(),
        products = dataset.products().len(),
        "rules table loaded"
    );
    Ok(dataset)
}

type Grid = (Vec<String>, Vec<Vec<Option<String>>>);

fn read_workbook(path: &Path, sheet: &str) -> Result<Grid, DatasetError> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| DatasetError::Workbook(e.to_string()))?;

    if !workbook.sheet_names().iter().any(|s| s == sheet) {
        return Err(DatasetError::MissingSheet {
            path: path.to_path_buf(),
            sheet: sheet.to_string(),
        });
    }

    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| DatasetError::Workbook(e.to_string()))?;

    let mut rows = range.rows();
    let header: Vec<String> = rows
        .next()
        .map(|cells| {
            cells
                .iter()
                .map(|c| cell_text(c).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    let records: Vec<Vec<Option<String>>> = rows
        .map(|cells| cells.iter().map(cell_text).collect())
        .collect();

    Ok((header, records))
}

fn read_csv(path: &Path) -> Result<Grid, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)?;

    let header: Vec<String> = reader.headers()?.iter().map(str::to_owned).collect();
    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        records.push(record.iter().map(normalise).collect());
    }

    Ok((header, records))
}

/// Text of a workbook cell, or `None` when the cell carries no usable value.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => normalise(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(format_number(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(d) => Some(format_number(d.as_f64())),
    }
}

fn normalise(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Whole floats print without a fractional part: spreadsheets store `1` as `1.0`.
fn format_number(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

// ── Header resolution ─────────────────────────────────────────

struct HeaderIndex {
    product: usize,
    level: usize,
    mapping_logic: usize,
    fields: [Option<usize>; PAIR_COUNT],
    values: [Option<usize>; PAIR_COUNT],
    feature_level: Option<usize>,
    feature_id: Option<usize>,
    feature_fields: [Option<usize>; PAIR_COUNT],
    feature_values: [Option<usize>; PAIR_COUNT],
}

impl HeaderIndex {
    fn resolve(header: &[String], columns: &ColumnMapping) -> Result<Self, DatasetError> {
        let positions: HashMap<&str, usize> = header
            .iter()
            .enumerate()
            .rev()
            .map(|(i, name)| (name.trim(), i))
            .collect();

        let optional = |name: &str| positions.get(name).copied();
        let required = |name: &str| {
            optional(name).ok_or_else(|| DatasetError::MissingColumn {
                column: name.to_string(),
            })
        };
        let indexed = |template: &str| -> [Option<usize>; PAIR_COUNT] {
            std::array::from_fn(|i| optional(ColumnMapping::indexed(template, i + 1).as_str()))
        };

        Ok(Self {
            product: required(columns.product.as_str())?,
            level: required(columns.level.as_str())?,
            mapping_logic: required(columns.mapping_logic.as_str())?,
            fields: indexed(columns.field.as_str()),
            values: indexed(columns.value.as_str()),
            feature_level: optional(columns.feature_level.as_str()),
            feature_id: optional(columns.feature_id.as_str()),
            feature_fields: indexed(columns.feature_field.as_str()),
            feature_values: indexed(columns.feature_value.as_str()),
        })
    }
}

/// Map a header row plus record grid onto [`Row`]s.
pub fn rows_from_table<I>(
    header: &[String],
    records: I,
    columns: &ColumnMapping,
) -> Result<Vec<Row>, DatasetError>
where
    I: IntoIterator<Item = Vec<Option<String>>>,
{
    let index = HeaderIndex::resolve(header, columns)?;
    let mut rows = Vec::new();

    for (n, record) in records.into_iter().enumerate() {
        let cell = |pos: Option<usize>| pos.and_then(|p| record.get(p).cloned().flatten());

        let Some(product) = cell(Some(index.product)) else {
            // Header is sheet row 1.
            tracing::warn!(row = n + 2, "skipping row without product");
            continue;
        };

        rows.push(Row {
            product,
            level: cell(Some(index.level)),
            mapping_logic: cell(Some(index.mapping_logic)),
            fields: index.fields.map(cell),
            values: index.values.map(cell),
            feature_level: cell(index.feature_level),
            feature_id: cell(index.feature_id),
            feature_fields: index.feature_fields.map(cell),
            feature_values: index.feature_values.map(cell),
        });
    }

    Ok(rows)
}
