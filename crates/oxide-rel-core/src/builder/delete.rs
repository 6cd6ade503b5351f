//! DELETE rendering.

use super::buffer::BufferConfig;
use super::filter::FilterBuilder;
use crate::query::Delete;
use crate::value::Value;

/// Renders [`Delete`] descriptors.
#[derive(Debug, Clone, Copy)]
pub struct DeleteBuilder<'a> {
    config: &'a BufferConfig,
}

impl<'a> DeleteBuilder<'a> {
    /// Creates a delete builder over `config`.
    #[must_use]
    pub const fn new(config: &'a BufferConfig) -> Self {
        Self { config }
    }

    /// Builds the DELETE statement and returns SQL with parameters.
    #[must_use]
    pub fn build(self, delete: &Delete) -> (String, Vec<Value>) {
        let mut buffer = self.config.buffer();
        buffer.push_str("DELETE FROM ");
        buffer.push_id(&delete.table);

        if !delete.filter.is_empty() {
            buffer.push_str(" WHERE ");
            FilterBuilder.write(&mut buffer, &delete.filter);
        }

        buffer.into_parts()
    }
}
