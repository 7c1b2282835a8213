//! Column type registry with explicit registration.
//!
//! The [`TypeRegistry`] maps name tokens to column types. It is constructed
//! explicitly and passed to whoever needs it; there is no global registry.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{DbalError, Result};
use crate::types::Timestamp;

use super::field::FieldDeclaration;
use super::traits::ColumnType;

/// Registry of column types keyed by name token.
///
/// # Example
///
/// ```rust
/// use dbal_timestamp::{FieldDeclaration, TypeRegistry};
///
/// let registry = TypeRegistry::with_builtins();
/// let decl = registry
///     .declaration("timestamp", "mssql", &FieldDeclaration::new().with_precision(6))
///     .unwrap();
/// assert_eq!(decl, "DATETIME2(6)");
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    types: HashMap<String, Arc<dyn ColumnType>>,
}

impl TypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the built-in column types registered.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry
            .types
            .insert(Timestamp::NAME.to_string(), Arc::new(Timestamp::new()));
        registry
    }

    /// Register a column type under its own name token.
    pub fn register(&mut self, column_type: impl ColumnType + 'static) -> Result<()> {
        self.register_arc(Arc::new(column_type))
    }

    /// Register a column type as an Arc (for sharing).
    pub fn register_arc(&mut self, column_type: Arc<dyn ColumnType>) -> Result<()> {
        let name = column_type.name().to_string();
        if self.types.contains_key(&name) {
            return Err(DbalError::DuplicateType(name));
        }
        debug!("Registered column type '{}'", name);
        self.types.insert(name, column_type);
        Ok(())
    }

    /// Get a column type by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ColumnType>> {
        self.types.get(name).cloned()
    }

    /// Get a column type by name, returning an error if not found.
    pub fn require(&self, name: &str) -> Result<Arc<dyn ColumnType>> {
        self.get(name)
            .ok_or_else(|| DbalError::UnknownType(name.to_string()))
    }

    /// Check if a column type is registered.
    pub fn has(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered name tokens, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve the declaration of a registered type for a platform identifier.
    pub fn declaration(
        &self,
        type_name: &str,
        platform: &str,
        field: &FieldDeclaration,
    ) -> Result<String> {
        self.require(type_name)?.resolve_declaration(platform, field)
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("types", &self.names())
            .finish()
    }
}
