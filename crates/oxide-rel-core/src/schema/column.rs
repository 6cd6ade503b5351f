//! Column descriptors.

use super::SchemaOp;
use crate::value::Value;

/// Logical column types understood by every dialect.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    /// Auto-incrementing identifier.
    Id,
    /// Auto-incrementing 64-bit identifier.
    BigId,
    /// Boolean.
    Bool,
    /// Small integer.
    SmallInt,
    /// Integer.
    Int,
    /// Big integer.
    BigInt,
    /// Floating point.
    Float,
    /// Fixed point decimal.
    Decimal,
    /// Bounded string.
    String,
    /// Unbounded text.
    Text,
    /// JSON document.
    Json,
    /// Date only.
    Date,
    /// Date and time.
    DateTime,
    /// Time only.
    Time,
    /// Binary large object.
    Blob,
    /// Dialect-specific type name, written verbatim.
    Custom(String),
}

impl ColumnType {
    /// Returns whether this is one of the auto-incrementing identity types.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        matches!(self, Self::Id | Self::BigId)
    }
}

/// A column definition, or a change to one.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Operation on this column.
    pub op: SchemaOp,
    /// Column name.
    pub name: String,
    /// New name, for renames.
    pub rename: Option<String>,
    /// Logical type.
    pub kind: ColumnType,
    /// Part of the primary key.
    pub primary: bool,
    /// Has a UNIQUE constraint.
    pub unique: bool,
    /// NOT NULL.
    pub required: bool,
    /// Unsigned numeric.
    pub unsigned: bool,
    /// Length or display width.
    pub limit: Option<u32>,
    /// Numeric precision.
    pub precision: Option<u32>,
    /// Numeric scale.
    pub scale: Option<u32>,
    /// Default value.
    pub default: Option<Value>,
    /// Raw SQL appended after the column definition.
    pub options: String,
}

impl Column {
    /// Creates a column to be added.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            op: SchemaOp::Create,
            name: name.into(),
            rename: None,
            kind,
            primary: false,
            unique: false,
            required: false,
            unsigned: false,
            limit: None,
            precision: None,
            scale: None,
            default: None,
            options: String::new(),
        }
    }

    /// Describes renaming an existing column.
    #[must_use]
    pub fn rename(name: impl Into<String>, to: impl Into<String>) -> Self {
        let mut column = Self::new(name, ColumnType::Text);
        column.op = SchemaOp::Rename;
        column.rename = Some(to.into());
        column
    }

    /// Describes changing an existing column's type.
    #[must_use]
    pub fn alter(name: impl Into<String>, kind: ColumnType) -> Self {
        let mut column = Self::new(name, kind);
        column.op = SchemaOp::Alter;
        column
    }

    /// Describes dropping an existing column.
    #[must_use]
    pub fn drop(name: impl Into<String>) -> Self {
        let mut column = Self::new(name, ColumnType::Text);
        column.op = SchemaOp::Drop;
        column
    }

    /// Marks the column as (part of) the primary key.
    #[must_use]
    pub const fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Adds a UNIQUE constraint.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Makes the column NOT NULL.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the column unsigned.
    #[must_use]
    pub const fn unsigned(mut self) -> Self {
        self.unsigned = true;
        self
    }

    /// Sets the length limit or display width.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets precision and scale.
    #[must_use]
    pub const fn precision(mut self, precision: u32, scale: u32) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Appends raw SQL after the definition.
    #[must_use]
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_builder() {
        let column = Column::new("email", ColumnType::String)
            .limit(100)
            .required()
            .unique();
        assert_eq!(column.op, SchemaOp::Create);
        assert_eq!(column.limit, Some(100));
        assert!(column.required && column.unique);
        assert!(!column.primary);
    }

    #[test]
    fn test_column_operations() {
        let rename = Column::rename("string", "name");
        assert_eq!(rename.op, SchemaOp::Rename);
        assert_eq!(rename.rename.as_deref(), Some("name"));

        assert_eq!(Column::alter("bool", ColumnType::Int).op, SchemaOp::Alter);
        assert_eq!(Column::drop("blob").op, SchemaOp::Drop);
    }

    #[test]
    fn test_identity_types() {
        assert!(ColumnType::Id.is_identity());
        assert!(ColumnType::BigId.is_identity());
        assert!(!ColumnType::Int.is_identity());
    }
}
