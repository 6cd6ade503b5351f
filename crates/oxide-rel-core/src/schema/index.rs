//! Index descriptors.

use super::SchemaOp;
use crate::query::FilterQuery;

/// An index to create or drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Index {
    /// Create or drop.
    pub op: SchemaOp,
    /// Indexed table.
    pub table: String,
    /// Index name.
    pub name: String,
    /// UNIQUE index.
    pub unique: bool,
    /// Indexed columns.
    pub columns: Vec<String>,
    /// Adds IF NOT EXISTS / IF EXISTS.
    pub optional: bool,
    /// Partial index predicate.
    pub filter: FilterQuery,
    /// Raw SQL appended after the statement.
    pub options: String,
}

impl Index {
    /// Describes creating an index on `table`.
    #[must_use]
    pub fn create(table: impl Into<String>, name: impl Into<String>, columns: &[&str]) -> Self {
        Self {
            op: SchemaOp::Create,
            table: table.into(),
            name: name.into(),
            unique: false,
            columns: columns.iter().map(ToString::to_string).collect(),
            optional: false,
            filter: FilterQuery::default(),
            options: String::new(),
        }
    }

    /// Describes dropping the named index.
    #[must_use]
    pub fn drop(name: impl Into<String>) -> Self {
        let mut index = Self::create(String::new(), name, &[]);
        index.op = SchemaOp::Drop;
        index
    }

    /// Makes the index UNIQUE.
    #[must_use]
    pub const fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Adds IF NOT EXISTS (create) or IF EXISTS (drop).
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Restricts the index to rows matching `filter`.
    #[must_use]
    pub fn filter(mut self, filter: FilterQuery) -> Self {
        self.filter = filter;
        self
    }

    /// Appends raw SQL after the statement.
    #[must_use]
    pub fn options(mut self, options: impl Into<String>) -> Self {
        self.options = options.into();
        self
    }
}
