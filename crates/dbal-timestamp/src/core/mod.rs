//! Core abstractions shared by all column types.
//!
//! - [`field`]: the per-column field declaration record
//! - [`traits`]: the [`ColumnType`] trait and hydration [`Capability`] tags
//! - [`catalog`]: the explicit [`TypeRegistry`] keyed by name token

pub mod catalog;
pub mod field;
pub mod traits;

pub use catalog::TypeRegistry;
pub use field::FieldDeclaration;
pub use traits::{Capability, ColumnType};
