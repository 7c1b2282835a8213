//! Configuration validation.

use std::collections::HashSet;

use super::ColumnSetConfig;
use crate::error::{DbalError, Result};

/// Validate the configuration.
pub fn validate(config: &ColumnSetConfig) -> Result<()> {
    if config.columns.is_empty() {
        return Err(DbalError::Config("columns must not be empty".into()));
    }

    let mut seen = HashSet::new();
    for (idx, column) in config.columns.iter().enumerate() {
        if column.name.is_empty() {
            return Err(DbalError::Config(format!(
                "columns[{}].name is required",
                idx
            )));
        }
        if column.r#type.is_empty() {
            return Err(DbalError::Config(format!(
                "columns[{}].type must not be empty",
                idx
            )));
        }
        if !seen.insert(column.name.as_str()) {
            return Err(DbalError::Config(format!(
                "duplicate column name '{}'",
                column.name
            )));
        }
    }

    Ok(())
}
