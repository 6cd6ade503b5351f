//! Dialect-neutral column type mapping and column options.

use std::fmt;

use crate::schema::{Column, ColumnType};

/// Default length of `VARCHAR` columns without an explicit limit.
pub const DEFAULT_STRING_LIMIT: u32 = 255;

/// A resolved SQL column type.
///
/// `limit` and `scale` are written as `NAME(limit)` or `NAME(limit,scale)`;
/// a scale without a limit is not written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSqlType {
    /// Type name, e.g. `INTEGER` or `UNSIGNED INTEGER`.
    pub name: String,
    /// Length, display width or precision.
    pub limit: Option<u32>,
    /// Numeric scale.
    pub scale: Option<u32>,
}

impl ColumnSqlType {
    /// Creates a type with no limit and no scale.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            limit: None,
            scale: None,
        }
    }

    /// Sets the limit.
    #[must_use]
    pub const fn with_limit(mut self, limit: Option<u32>) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the scale.
    #[must_use]
    pub const fn with_scale(mut self, scale: Option<u32>) -> Self {
        self.scale = scale;
        self
    }
}

impl fmt::Display for ColumnSqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        match (self.limit, self.scale) {
            (Some(limit), Some(scale)) => write!(f, "({limit},{scale})"),
            (Some(limit), None) => write!(f, "({limit})"),
            (None, _) => Ok(()),
        }
    }
}

/// Maps a column to a dialect-neutral SQL type.
#[must_use]
pub fn map_column(column: &Column) -> ColumnSqlType {
    match &column.kind {
        ColumnType::Id => ColumnSqlType::new("INT"),
        ColumnType::BigId => ColumnSqlType::new("BIGINT"),
        ColumnType::Bool => ColumnSqlType::new("BOOL"),
        ColumnType::SmallInt => ColumnSqlType::new("SMALLINT").with_limit(column.limit),
        ColumnType::Int => ColumnSqlType::new("INT").with_limit(column.limit),
        ColumnType::BigInt => ColumnSqlType::new("BIGINT").with_limit(column.limit),
        ColumnType::Float => ColumnSqlType::new("FLOAT").with_limit(column.precision),
        ColumnType::Decimal => ColumnSqlType::new("DECIMAL")
            .with_limit(column.precision)
            .with_scale(column.scale),
        ColumnType::String => ColumnSqlType::new("VARCHAR")
            .with_limit(Some(column.limit.unwrap_or(DEFAULT_STRING_LIMIT))),
        ColumnType::Text => ColumnSqlType::new("TEXT").with_limit(column.limit),
        ColumnType::Json => ColumnSqlType::new("TEXT"),
        ColumnType::Date => ColumnSqlType::new("DATE"),
        ColumnType::DateTime => ColumnSqlType::new("DATETIME"),
        ColumnType::Time => ColumnSqlType::new("TIME"),
        ColumnType::Blob => ColumnSqlType::new("BLOB"),
        ColumnType::Custom(name) => ColumnSqlType::new(name.clone()),
    }
}

/// Renders the inline constraints of a column, space separated.
#[must_use]
pub fn column_options(column: &Column) -> String {
    let mut options = Vec::new();
    if column.primary {
        options.push("PRIMARY KEY");
    }
    if column.required {
        options.push("NOT NULL");
    }
    if column.unique {
        options.push("UNIQUE");
    }
    options.join(" ")
}
