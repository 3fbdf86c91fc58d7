//! Column header mapping for the rules sheet.
//!
//! Defaults match the header row of the published workbook. Any key can be
//! overridden from YAML:
//!
//! ```yaml
//! product: "PRODUCT_NAME_EXT"
//! level: "NIVEL PRODUCTO"
//! field: "Campo {i}"
//! value: "Valor {i}"
//! ```
//!
//! Indexed headers use `{i}` as the 1-based pair index.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;

const INDEX_PLACEHOLDER: &str = "{i}";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMapping {
    pub product: String,
    pub level: String,
    pub mapping_logic: String,
    pub field: String,
    pub value: String,
    pub feature_level: String,
    pub feature_id: String,
    pub feature_field: String,
    pub feature_value: String,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            product: "PRODUCT_NAME_EXT".into(),
            level: "NIVEL PRODUCTO".into(),
            mapping_logic: "MAPPINGS_LOGIC".into(),
            field: "Campo {i}".into(),
            value: "Valor {i}".into(),
            feature_level: "NIVEL FEATURE".into(),
            feature_id: "ID_FEATURE".into(),
            feature_field: "Feature Campo {i}".into(),
            feature_value: "Feature Valor {i}".into(),
        }
    }
}

impl ColumnMapping {
    /// Load a mapping from a YAML file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DatasetError::MissingSource {
                    path: path.to_path_buf(),
                }
            } else {
                DatasetError::Io(e)
            }
        })?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, DatasetError> {
        serde_yaml::from_str(content).map_err(|e| DatasetError::ColumnConfig(e.to_string()))
    }

    /// Expand an indexed header template for pair `index` (1-based).
    pub fn indexed(template: &str, index: usize) -> String {
        template.replace(INDEX_PLACEHOLDER, &index.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = r#"
product: "Product"
field: "Field {i}"
"#;
        let mapping = ColumnMapping::from_yaml(yaml).unwrap();
        assert_eq!(mapping.product, "Product");
        assert_eq!(mapping.field, "Field {i}");
        assert_eq!(mapping.level, "NIVEL PRODUCTO");
        assert_eq!(mapping.feature_id, "ID_FEATURE");
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = ColumnMapping::from_yaml("prodcut: \"X\"").unwrap_err();
        assert!(matches!(err, DatasetError::ColumnConfig(_)));
    }

    #[test]
    fn indexed_header_expansion() {
        assert_eq!(ColumnMapping::indexed("Campo {i}", 3), "Campo 3");
        assert_eq!(ColumnMapping::indexed("Feature Valor {i}", 7), "Feature Valor 7");
    }
}
