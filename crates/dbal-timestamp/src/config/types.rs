//! Column-set configuration type definitions.

use serde::{Deserialize, Serialize};

use crate::core::field::FieldDeclaration;
use crate::platform::Platform;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSetConfig {
    /// Target platform identifier (any accepted alias).
    pub platform: Platform,

    /// Column declarations, in output order.
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,
}

/// A single named column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnConfig {
    /// Column name.
    pub name: String,

    /// Registered column type name (default: "timestamp").
    #[serde(rename = "type", default = "default_type")]
    pub r#type: String,

    /// Field options (precision, notnull, useCurrent, useCurrentOnUpdate).
    #[serde(flatten)]
    pub field: FieldDeclaration,
}

/// A resolved column: its name and SQL DDL fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDeclaration {
    pub name: String,
    pub declaration: String,
}

fn default_type() -> String {
    crate::types::Timestamp::NAME.to_string()
}
