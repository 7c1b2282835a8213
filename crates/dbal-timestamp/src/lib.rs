//! # dbal-timestamp
//!
//! Platform-aware `timestamp` column type for SQL schema generation.
//!
//! The [`Timestamp`] type renders a column declaration for each supported
//! database platform:
//!
//! - **MySQL**: `TIMESTAMP[(p)] [NULL] [DEFAULT CURRENT_TIMESTAMP[(p)]] [ON UPDATE CURRENT_TIMESTAMP[(p)]]`
//! - **PostgreSQL**: `TIMESTAMP(p)`
//! - **SQL Server**: `DATETIME2(p)` or `DATETIME`
//! - **SQLite**: `DATETIME`
//!
//! Types are looked up by name token through an explicit [`TypeRegistry`].
//!
//! ## Example
//!
//! ```rust
//! use dbal_timestamp::{ColumnType, FieldDeclaration, Timestamp};
//!
//! let field = FieldDeclaration::new()
//!     .with_precision(3)
//!     .with_use_current(true);
//! let sql = Timestamp.resolve_declaration("mysql", &field)?;
//! assert_eq!(sql, "TIMESTAMP(3) DEFAULT CURRENT_TIMESTAMP(3)");
//! # Ok::<(), dbal_timestamp::DbalError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod platform;
pub mod types;

// Re-exports for convenient access
pub use config::{ColumnConfig, ColumnDeclaration, ColumnSetConfig};
pub use crate::core::{Capability, ColumnType, FieldDeclaration, TypeRegistry};
pub use error::{DbalError, Result};
pub use platform::Platform;
pub use types::Timestamp;
