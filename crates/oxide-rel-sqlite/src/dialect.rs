//! SQLite dialect.

use oxide_rel_core::builder::{BufferConfig, ColumnSqlType, Quoter};
use oxide_rel_core::schema::{Column, Table, TableDefinition};
use oxide_rel_core::{Dialect, DialectConfig, Error, OnConflictConfig};

use crate::{column, definition, error};

/// SQLite dialect.
///
/// Built once and shared; builders borrow its constants.
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    config: DialectConfig,
}

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub fn new() -> Self {
        let buffer = BufferConfig {
            placeholder: "?".to_string(),
            bool_true: "1".to_string(),
            bool_false: "0".to_string(),
            inline_values: false,
            quoter: Quoter {
                id_prefix: "\"".to_string(),
                id_suffix: "\"".to_string(),
                id_suffix_escape: "\"\"".to_string(),
                value_quote: "'".to_string(),
                value_quote_escape: "''".to_string(),
            },
        };

        Self {
            config: DialectConfig {
                ddl_buffer: BufferConfig {
                    inline_values: true,
                    ..buffer.clone()
                },
                buffer,
                on_conflict: OnConflictConfig {
                    statement: "ON CONFLICT".to_string(),
                    ignore: "DO NOTHING".to_string(),
                    update: "DO UPDATE SET".to_string(),
                    table_qualifier: "EXCLUDED".to_string(),
                    support_key: true,
                },
                insert_default_values: true,
                supports_index_filter: true,
                // last_insert_rowid() reports the last row of a multi-row insert.
                increment: -1,
            },
        }
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn config(&self) -> &DialectConfig {
        &self.config
    }

    fn map_column(&self, column: &Column) -> ColumnSqlType {
        column::map_column(column)
    }

    fn column_options(&self, column: &Column) -> String {
        column::column_options(column)
    }

    fn filter_definition(&self, table: &Table, definition: &TableDefinition) -> bool {
        definition::filter_definition(table, definition)
    }

    fn map_error(&self, err: Error) -> Error {
        error::classify(err)
    }
}
