//! Platform-aware `timestamp` column type.

use crate::core::field::FieldDeclaration;
use crate::core::traits::{Capability, ColumnType};
use crate::platform::Platform;

/// `timestamp` column type.
///
/// Renders `TIMESTAMP` on MySQL and PostgreSQL, `DATETIME2`/`DATETIME` on
/// SQL Server and `DATETIME` on SQLite. Hydrates to both date/time and
/// integer values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timestamp;

impl Timestamp {
    /// Name token used for registration.
    pub const NAME: &'static str = "timestamp";

    pub fn new() -> Self {
        Self
    }
}

impl ColumnType for Timestamp {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn sql_declaration(&self, field: &FieldDeclaration, platform: Platform) -> String {
        match platform {
            Platform::Mysql => mysql_declaration(field),
            Platform::Postgres => postgres_declaration(field),
            Platform::SqlServer => sql_server_declaration(field),
            Platform::Sqlite => sqlite_declaration(field),
        }
    }

    fn capabilities(&self) -> &[Capability] {
        &[Capability::DateTime, Capability::Integer]
    }
}

fn mysql_declaration(field: &FieldDeclaration) -> String {
    let mut column = String::from("TIMESTAMP");
    let mut current = String::from("CURRENT_TIMESTAMP");

    if let Some(precision) = field.positive_precision() {
        let suffix = format!("({})", precision);
        column.push_str(&suffix);
        current.push_str(&suffix);
    }

    if field.is_explicitly_nullable() {
        column.push_str(" NULL");
    }

    // The host may replace the NULL clause once a default is present; emit it anyway.
    if field.uses_current() {
        column.push_str(" DEFAULT ");
        column.push_str(&current);
    }

    if field.uses_current_on_update() {
        column.push_str(" ON UPDATE ");
        column.push_str(&current);
    }

    column
}

fn postgres_declaration(field: &FieldDeclaration) -> String {
    format!("TIMESTAMP({})", field.precision.unwrap_or(0))
}

fn sql_server_declaration(field: &FieldDeclaration) -> String {
    match field.positive_precision() {
        Some(precision) => format!("DATETIME2({})", precision),
        None => "DATETIME".to_string(),
    }
}

fn sqlite_declaration(_field: &FieldDeclaration) -> String {
    "DATETIME".to_string()
}
