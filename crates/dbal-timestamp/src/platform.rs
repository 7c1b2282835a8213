//! Target database platforms.
//!
//! Platform identifiers arrive as free-form strings from the host framework.
//! [`Platform::from_name`] turns them into a closed enum so that every
//! column type can match exhaustively; the unsupported case only exists at
//! this parsing boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{DbalError, Result};

/// Supported database platform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// MySQL / MariaDB.
    Mysql,
    /// PostgreSQL.
    Postgres,
    /// Microsoft SQL Server.
    SqlServer,
    /// SQLite.
    Sqlite,
}

impl Platform {
    /// Every supported platform, in declaration order.
    pub const ALL: [Platform; 4] = [
        Platform::Mysql,
        Platform::Postgres,
        Platform::SqlServer,
        Platform::Sqlite,
    ];

    /// Parse a platform identifier.
    ///
    /// Matching is exact and case-sensitive:
    /// - "mysql", "mysql2" → `Mysql`
    /// - "postgresql", "pgsql", "postgres" → `Postgres`
    /// - "mssql" → `SqlServer`
    /// - "sqlite", "sqlite3" → `Sqlite`
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "mysql" | "mysql2" => Ok(Platform::Mysql),
            "postgresql" | "pgsql" | "postgres" => Ok(Platform::Postgres),
            "mssql" => Ok(Platform::SqlServer),
            "sqlite" | "sqlite3" => Ok(Platform::Sqlite),
            other => Err(DbalError::unsupported_platform(other)),
        }
    }

    /// Canonical identifier for this platform.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Mysql => "mysql",
            Platform::Postgres => "postgresql",
            Platform::SqlServer => "mssql",
            Platform::Sqlite => "sqlite",
        }
    }

    /// All identifiers accepted by [`Platform::from_name`] for this platform.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Platform::Mysql => &["mysql", "mysql2"],
            Platform::Postgres => &["postgresql", "pgsql", "postgres"],
            Platform::SqlServer => &["mssql"],
            Platform::Sqlite => &["sqlite", "sqlite3"],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = DbalError;

    fn from_str(s: &str) -> Result<Self> {
        Platform::from_name(s)
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Platform::from_name(&name).map_err(serde::de::Error::custom)
    }
}
