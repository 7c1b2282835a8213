//! Field declaration metadata supplied by the host framework.

use serde::{Deserialize, Serialize};

/// Configured options for a single column.
///
/// Every option is optional; an absent key deserializes to `None`. Column
/// types only ever borrow a declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FieldDeclaration {
    /// Fractional-seconds digits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,

    /// Column nullability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notnull: Option<bool>,

    /// Default the column to the current timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_current: Option<bool>,

    /// Refresh the column to the current timestamp on row update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_current_on_update: Option<bool>,
}

impl FieldDeclaration {
    /// Create an empty declaration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_notnull(mut self, notnull: bool) -> Self {
        self.notnull = Some(notnull);
        self
    }

    pub fn with_use_current(mut self, use_current: bool) -> Self {
        self.use_current = Some(use_current);
        self
    }

    pub fn with_use_current_on_update(mut self, on_update: bool) -> Self {
        self.use_current_on_update = Some(on_update);
        self
    }

    /// Precision when it is strictly positive.
    ///
    /// A precision of zero behaves like an absent one wherever a platform
    /// only appends a suffix for "set" precision.
    pub fn positive_precision(&self) -> Option<u32> {
        self.precision.filter(|&p| p > 0)
    }

    /// True only when `notnull` was explicitly set to false.
    pub fn is_explicitly_nullable(&self) -> bool {
        self.notnull == Some(false)
    }

    pub fn uses_current(&self) -> bool {
        self.use_current.unwrap_or(false)
    }

    pub fn uses_current_on_update(&self) -> bool {
        self.use_current_on_update.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let field = FieldDeclaration::new()
            .with_precision(3)
            .with_notnull(true)
            .with_use_current(true)
            .with_use_current_on_update(false);

        assert_eq!(field.precision, Some(3));
        assert_eq!(field.notnull, Some(true));
        assert!(field.uses_current());
        assert!(!field.uses_current_on_update());
    }

    #[test]
    fn test_positive_precision() {
        assert_eq!(FieldDeclaration::new().positive_precision(), None);
        assert_eq!(
            FieldDeclaration::new().with_precision(0).positive_precision(),
            None
        );
        assert_eq!(
            FieldDeclaration::new().with_precision(6).positive_precision(),
            Some(6)
        );
    }

    #[test]
    fn test_explicit_nullability() {
        assert!(!FieldDeclaration::new().is_explicitly_nullable());
        assert!(!FieldDeclaration::new().with_notnull(true).is_explicitly_nullable());
        assert!(FieldDeclaration::new().with_notnull(false).is_explicitly_nullable());
    }

    #[test]
    fn test_deserialize_camel_case_keys() {
        let yaml = "precision: 3\nnotnull: false\nuseCurrent: true\nuseCurrentOnUpdate: true\n";
        let field: FieldDeclaration = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            field,
            FieldDeclaration::new()
                .with_precision(3)
                .with_notnull(false)
                .with_use_current(true)
                .with_use_current_on_update(true)
        );
    }

    #[test]
    fn test_deserialize_missing_keys_are_none() {
        let field: FieldDeclaration = serde_yaml::from_str("{}").unwrap();
        assert_eq!(field, FieldDeclaration::default());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let yaml = serde_yaml::to_string(&FieldDeclaration::new().with_use_current(true)).unwrap();
        assert_eq!(yaml.trim(), "useCurrent: true");
    }
}
