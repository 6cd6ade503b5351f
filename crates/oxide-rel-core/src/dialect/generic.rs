//! Generic SQL dialect.

use super::{Dialect, DialectConfig, OnConflictConfig};
use crate::builder::{BufferConfig, Quoter};

/// A generic SQL dialect using ANSI SQL spellings.
#[derive(Debug, Clone)]
pub struct GenericDialect {
    config: DialectConfig,
}

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub fn new() -> Self {
        let buffer = BufferConfig {
            placeholder: "?".to_string(),
            bool_true: "TRUE".to_string(),
            bool_false: "FALSE".to_string(),
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
                supports_index_filter: false,
                increment: 1,
            },
        }
    }
}

impl Default for GenericDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn config(&self) -> &DialectConfig {
        &self.config
    }
}
