//! Table descriptors.

use super::{Column, Key, SchemaOp};

/// One definition inside a table descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum TableDefinition {
    /// A column.
    Column(Column),
    /// A table-level key.
    Key(Key),
}

impl From<Column> for TableDefinition {
    fn from(column: Column) -> Self {
        Self::Column(column)
    }
}

impl From<Key> for TableDefinition {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

/// A table to create, alter, rename or drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Operation on this table.
    pub op: SchemaOp,
    /// Table name.
    pub name: String,
    /// New name, for renames.
    pub rename: Option<String>,
    /// Ordered column and key definitions.
    pub definitions: Vec<TableDefinition>,
    /// Adds IF NOT EXISTS / IF EXISTS.
    pub optional: bool,
    /// Raw SQL appended after the statement.
    pub options: String,
}

impl Table {
    fn new(op: SchemaOp, name: impl Into<String>) -> Self {
        Self {
            op,
            name: name.into(),
            rename: None,
            definitions: Vec::new(),
            optional: false,
            options: String::new(),
        }
    }

    /// Describes creating a table.
    #[must_use]
    pub fn create(name: impl Into<String>) -> Self {
        Self::new(SchemaOp::Create, name)
    }

    /// Describes altering a table.
    #[must_use]
    pub fn alter(name: impl Into<String>) -> Self {
        Self::new(SchemaOp::Alter, name)
    }

    /// Describes renaming a table.
    #[must_use]
    pub fn rename(name: impl Into<String>, to: impl Into<String>) -> Self {
        let mut table = Self::new(SchemaOp::Rename, name);
        table.rename = Some(to.into());
        table
    }

    /// Describes dropping a table.
    #[must_use]
    pub fn drop(name: impl Into<String>) -> Self {
        Self::new(SchemaOp::Drop, name)
    }

    /// Appends a column or key definition.
    #[must_use]
    pub fn definition(mut self, definition: impl Into<TableDefinition>) -> Self {
        self.definitions.push(definition.into());
        self
    }

    /// Appends a column definition.
    #[must_use]
    pub fn column(self, column: Column) -> Self {
        self.definition(column)
    }

    /// Appends a key definition.
    #[must_use]
    pub fn key(self, key: Key) -> Self {
        self.definition(key)
    }

    /// Adds IF NOT EXISTS (create) or IF EXISTS (drop).
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Appends raw SQL after the statement.
    #[must_use]
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnType;

    #[test]
    fn test_definitions_keep_order() {
        let table = Table::alter("columns")
            .column(Column::new("verified", ColumnType::Bool))
            .key(Key::unique(&["verified"]))
            .column(Column::drop("blob"));

        assert_eq!(table.op, SchemaOp::Alter);
        assert_eq!(table.definitions.len(), 3);
        assert!(matches!(table.definitions[1], TableDefinition::Key(_)));
        assert!(matches!(&table.definitions[2], TableDefinition::Column(c) if c.name == "blob"));
    }

    #[test]
    fn test_rename_table() {
        let table = Table::rename("users", "accounts");
        assert_eq!(table.op, SchemaOp::Rename);
        assert_eq!(table.rename.as_deref(), Some("accounts"));
    }
}
