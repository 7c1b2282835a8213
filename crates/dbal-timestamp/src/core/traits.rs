//! Core traits for platform-aware column types.
//!
//! - [`ColumnType`]: renders a column's SQL declaration per platform
//! - [`Capability`]: host representations a column hydrates to
//!
//! # Design Patterns
//!
//! - **Strategy**: each column type is an interchangeable declaration algorithm
//! - **Template Method**: [`ColumnType::resolve_declaration`] parses the
//!   platform identifier and then defers to the type-specific match

use tracing::trace;

use crate::error::Result;
use crate::platform::Platform;

use super::field::FieldDeclaration;

/// Host-side value representation a column type can hydrate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Date/time values.
    DateTime,
    /// Integer values (e.g. UNIX timestamps).
    Integer,
}

/// A custom column type known to the host framework's type registry.
pub trait ColumnType: Send + Sync {
    /// Stable name token the type is registered under.
    fn name(&self) -> &str;

    /// Render the SQL DDL fragment for `field` on `platform`.
    fn sql_declaration(&self, field: &FieldDeclaration, platform: Platform) -> String;

    /// Representations this type declares for hydration.
    fn capabilities(&self) -> &[Capability];

    fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities().contains(&capability)
    }

    /// Render the declaration for a free-form platform identifier.
    ///
    /// Fails with [`DbalError::UnsupportedPlatform`](crate::DbalError::UnsupportedPlatform)
    /// when the identifier is not a known alias.
    fn resolve_declaration(&self, platform: &str, field: &FieldDeclaration) -> Result<String> {
        let platform = Platform::from_name(platform)?;
        let declaration = self.sql_declaration(field, platform);
        trace!(
            column_type = self.name(),
            platform = %platform,
            declaration = %declaration,
            "Resolved column declaration"
        );
        Ok(declaration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbalError;

    struct MockType;

    impl ColumnType for MockType {
        fn name(&self) -> &str {
            "mock"
        }

        fn sql_declaration(&self, _field: &FieldDeclaration, platform: Platform) -> String {
            format!("MOCK_{}", platform.name().to_uppercase())
        }

        fn capabilities(&self) -> &[Capability] {
            &[Capability::Integer]
        }
    }

    #[test]
    fn test_resolve_declaration_parses_platform() {
        let decl = MockType
            .resolve_declaration("pgsql", &FieldDeclaration::new())
            .unwrap();
        assert_eq!(decl, "MOCK_POSTGRESQL");
    }

    #[test]
    fn test_resolve_declaration_unknown_platform() {
        let err = MockType
            .resolve_declaration("db2", &FieldDeclaration::new())
            .unwrap_err();
        assert!(matches!(err, DbalError::UnsupportedPlatform(ref p) if p == "db2"));
    }

    #[test]
    fn test_has_capability() {
        assert!(MockType.has_capability(Capability::Integer));
        assert!(!MockType.has_capability(Capability::DateTime));
    }
}
