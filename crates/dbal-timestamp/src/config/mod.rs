//! Column-set configuration loading, validation and resolution.

mod types;
mod validation;

pub use types::*;

use std::path::Path;

use tracing::{debug, info};

use crate::core::catalog::TypeRegistry;
use crate::error::Result;

impl ColumnSetConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        info!("Loaded column set from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ColumnSetConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        debug!(
            platform = %config.platform,
            columns = config.columns.len(),
            "Parsed column set"
        );
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }

    /// Resolve every column to its SQL declaration, in document order.
    pub fn resolve(&self, registry: &TypeRegistry) -> Result<Vec<ColumnDeclaration>> {
        self.columns
            .iter()
            .map(|column| -> Result<ColumnDeclaration> {
                let column_type = registry.require(&column.r#type)?;
                Ok(ColumnDeclaration {
                    name: column.name.clone(),
                    declaration: column_type.sql_declaration(&column.field, self.platform),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbalError;
    use crate::platform::Platform;

    const MYSQL_YAML: &str = r#"
platform: mysql2
columns:
  - name: created_at
    precision: 3
    notnull: true
    useCurrent: true
  - name: updated_at
    type: timestamp
    notnull: false
    useCurrentOnUpdate: true
"#;

    #[test]
    fn test_from_yaml() {
        let config = ColumnSetConfig::from_yaml(MYSQL_YAML).unwrap();
        assert_eq!(config.platform, Platform::Mysql);
        assert_eq!(config.columns.len(), 2);
        assert_eq!(config.columns[0].r#type, "timestamp");
        assert_eq!(config.columns[0].field.precision, Some(3));
        assert_eq!(config.columns[1].field.use_current_on_update, Some(true));
    }

    #[test]
    fn test_resolve() {
        let config = ColumnSetConfig::from_yaml(MYSQL_YAML).unwrap();
        let resolved = config.resolve(&TypeRegistry::with_builtins()).unwrap();
        assert_eq!(
            resolved,
            vec![
                ColumnDeclaration {
                    name: "created_at".into(),
                    declaration: "TIMESTAMP(3) DEFAULT CURRENT_TIMESTAMP(3)".into(),
                },
                ColumnDeclaration {
                    name: "updated_at".into(),
                    declaration: "TIMESTAMP NULL ON UPDATE CURRENT_TIMESTAMP".into(),
                },
            ]
        );
    }

    #[test]
    fn test_unknown_platform_rejected() {
        let yaml = "platform: oracle\ncolumns:\n  - name: created_at\n";
        let err = ColumnSetConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, DbalError::Yaml(_)));
        assert!(err.to_string().contains("Invalid platform: oracle"));
    }

    #[test]
    fn test_unknown_type_on_resolve() {
        let yaml = "platform: sqlite\ncolumns:\n  - name: ts\n    type: interval\n";
        let config = ColumnSetConfig::from_yaml(yaml).unwrap();
        let err = config.resolve(&TypeRegistry::with_builtins()).unwrap_err();
        assert!(matches!(err, DbalError::UnknownType(ref n) if n == "interval"));
    }

    #[test]
    fn test_validation_runs_on_parse() {
        let err = ColumnSetConfig::from_yaml("platform: mssql\ncolumns: []\n").unwrap_err();
        assert!(matches!(err, DbalError::Config(_)));
    }
}
