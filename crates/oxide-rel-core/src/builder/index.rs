//! Index DDL rendering.

use tracing::debug;

use super::filter::FilterBuilder;
use crate::dialect::Dialect;
use crate::schema::{Index, SchemaOp};

/// Renders [`Index`] descriptors for a dialect.
#[derive(Debug)]
pub struct IndexBuilder<'a, D: Dialect + ?Sized> {
    dialect: &'a D,
}

impl<D: Dialect + ?Sized> Clone for IndexBuilder<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dialect + ?Sized> Copy for IndexBuilder<'_, D> {}

impl<'a, D: Dialect + ?Sized> IndexBuilder<'a, D> {
    /// Creates an index builder for `dialect`.
    #[must_use]
    pub const fn new(dialect: &'a D) -> Self {
        Self { dialect }
    }

    /// Builds the DDL for `index`.
    ///
    /// Returns an empty string for operations indexes do not support.
    #[must_use]
    pub fn build(self, index: &Index) -> String {
        let config = self.dialect.config();
        let mut buffer = config.ddl_buffer.buffer();

        match index.op {
            SchemaOp::Create => {
                buffer.push_str("CREATE ");
                if index.unique {
                    buffer.push_str("UNIQUE ");
                }
                buffer.push_str("INDEX ");
                if index.optional {
                    buffer.push_str("IF NOT EXISTS ");
                }
                buffer.push_id(&index.name);
                buffer.push_str(" ON ");
                buffer.push_id(&index.table);
                buffer.push_str(" (");
                buffer.push_ids(&index.columns);
                buffer.push(')');

                if !index.filter.is_empty() {
                    if config.supports_index_filter {
                        buffer.push_str(" WHERE ");
                        FilterBuilder.write(&mut buffer, &index.filter);
                    } else {
                        debug!(
                            index = %index.name,
                            dialect = self.dialect.name(),
                            "partial index filter not supported, ignored"
                        );
                    }
                }
            }
            SchemaOp::Drop => {
                buffer.push_str("DROP INDEX ");
                if index.optional {
                    buffer.push_str("IF EXISTS ");
                }
                buffer.push_id(&index.name);
            }
            SchemaOp::Rename | SchemaOp::Alter => {
                debug!(index = %index.name, op = ?index.op, "unsupported index operation");
                return String::new();
            }
        }

        if !index.options.is_empty() {
            buffer.push(' ');
            buffer.push_str(&index.options);
        }
        buffer.push(';');
        buffer.into_sql()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::GenericDialect;
    use crate::query::FilterQuery;

    fn build(index: &Index) -> String {
        IndexBuilder::new(&GenericDialect::new()).build(index)
    }

    #[test]
    fn test_create_index() {
        assert_eq!(
            build(&Index::create("users", "idx_users_email", &["email"])),
            "CREATE INDEX \"idx_users_email\" ON \"users\" (\"email\");"
        );
        assert_eq!(
            build(&Index::create("users", "idx_users_name", &["first", "last"]).unique().optional()),
            "CREATE UNIQUE INDEX IF NOT EXISTS \"idx_users_name\" ON \"users\" (\"first\", \"last\");"
        );
    }

    #[test]
    fn test_generic_ignores_filter() {
        let index = Index::create("users", "idx_live", &["email"])
            .filter(FilterQuery::eq("deleted", false));
        assert_eq!(
            build(&index),
            "CREATE INDEX \"idx_live\" ON \"users\" (\"email\");"
        );
    }

    #[test]
    fn test_drop_index() {
        assert_eq!(build(&Index::drop("idx")), "DROP INDEX \"idx\";");
        assert_eq!(
            build(&Index::drop("idx").optional()),
            "DROP INDEX IF EXISTS \"idx\";"
        );
    }

    #[test]
    fn test_unsupported_index_op() {
        let mut index = Index::drop("idx");
        index.op = SchemaOp::Alter;
        assert_eq!(build(&index), "");
    }
}
