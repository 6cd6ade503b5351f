//! SQL dialect support.
//!
//! A dialect is an immutable set of constants ([`DialectConfig`]) plus a few
//! hooks the generic builders call out to. Every hook has a dialect-neutral
//! default, so a dialect only overrides what it does differently.

mod generic;

pub use generic::GenericDialect;

use serde::{Deserialize, Serialize};

use crate::builder::{self, BufferConfig, ColumnSqlType};
use crate::error::{Error, Result};
use crate::schema::{Column, Table, TableDefinition};

/// Spelling of conflict clauses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnConflictConfig {
    /// Clause introducer, e.g. `ON CONFLICT`.
    pub statement: String,
    /// Action for ignoring the row, e.g. `DO NOTHING`.
    pub ignore: String,
    /// Action for replacing the row, e.g. `DO UPDATE SET`.
    pub update: String,
    /// Qualifier of the proposed row, e.g. `EXCLUDED`.
    pub table_qualifier: String,
    /// Whether conflict keys can be named in the clause.
    pub support_key: bool,
}

/// Constants describing a dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectConfig {
    /// Buffer for DML, binding values as arguments.
    pub buffer: BufferConfig,
    /// Buffer for DDL, rendering values inline.
    pub ddl_buffer: BufferConfig,
    /// Conflict clause spelling.
    pub on_conflict: OnConflictConfig,
    /// Render field-less inserts as `DEFAULT VALUES`.
    pub insert_default_values: bool,
    /// Whether indexes accept a WHERE predicate.
    pub supports_index_filter: bool,
    /// Step between ids of rows inserted by one multi-row insert, relative
    /// to the reported last insert id.
    pub increment: i64,
}

/// Trait for SQL dialect-specific behavior.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the dialect constants.
    fn config(&self) -> &DialectConfig;

    /// Maps a column descriptor to a SQL type.
    fn map_column(&self, column: &Column) -> ColumnSqlType {
        builder::map_column(column)
    }

    /// Renders the inline constraints written after a column's type.
    fn column_options(&self, column: &Column) -> String {
        builder::column_options(column)
    }

    /// Decides whether a table definition is rendered at all.
    fn filter_definition(&self, _table: &Table, _definition: &TableDefinition) -> bool {
        true
    }

    /// Reclassifies an error reported by the driver.
    fn map_error(&self, err: Error) -> Error {
        err
    }

    /// Passes `Ok` through and reclassifies errors with [`Dialect::map_error`].
    fn map_result<T>(&self, result: Result<T>) -> Result<T>
    where
        Self: Sized,
    {
        result.map_err(|err| self.map_error(err))
    }

    /// Returns the id step used by multi-row inserts.
    fn increment(&self) -> i64 {
        self.config().increment
    }
}
