//! SELECT rendering.

use super::buffer::{Buffer, BufferConfig};
use super::filter::FilterBuilder;
use crate::query::{Query, SortQuery};
use crate::value::Value;

/// Renders [`Query`] descriptors.
#[derive(Debug, Clone, Copy)]
pub struct QueryBuilder<'a> {
    config: &'a BufferConfig,
}

impl<'a> QueryBuilder<'a> {
    /// Creates a query builder over `config`.
    #[must_use]
    pub const fn new(config: &'a BufferConfig) -> Self {
        Self { config }
    }

    /// Builds the SELECT statement and returns SQL with parameters.
    #[must_use]
    pub fn build(self, query: &Query) -> (String, Vec<Value>) {
        let mut buffer = self.config.buffer();
        self.write(&mut buffer, query);
        buffer.into_parts()
    }

    /// Writes the SELECT statement into `buffer`.
    pub fn write(self, buffer: &mut Buffer<'_>, query: &Query) {
        buffer.push_str("SELECT ");
        if query.distinct {
            buffer.push_str("DISTINCT ");
        }
        if query.fields.is_empty() {
            buffer.push('*');
        } else {
            buffer.push_ids(&query.fields);
        }

        buffer.push_str(" FROM ");
        buffer.push_id(&query.table);

        if !query.filter.is_empty() {
            buffer.push_str(" WHERE ");
            FilterBuilder.write(buffer, &query.filter);
        }

        if !query.group.is_empty() {
            buffer.push_str(" GROUP BY ");
            buffer.push_ids(&query.group);
        }

        if !query.sort.is_empty() {
            buffer.push_str(" ORDER BY ");
            for (i, sort) in query.sort.iter().enumerate() {
                if i > 0 {
                    buffer.push_str(", ");
                }
                match sort {
                    SortQuery::Asc(field) => {
                        buffer.push_id(field);
                        buffer.push_str(" ASC");
                    }
                    SortQuery::Desc(field) => {
                        buffer.push_id(field);
                        buffer.push_str(" DESC");
                    }
                }
            }
        }

        if let Some(limit) = query.limit {
            buffer.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = query.offset {
            buffer.push_str(&format!(" OFFSET {offset}"));
        }
    }
}
