//! UPDATE rendering.

use super::buffer::BufferConfig;
use super::filter::FilterBuilder;
use crate::query::{Mutate, Update};
use crate::value::Value;

/// Renders [`Update`] descriptors.
#[derive(Debug, Clone, Copy)]
pub struct UpdateBuilder<'a> {
    config: &'a BufferConfig,
}

impl<'a> UpdateBuilder<'a> {
    /// Creates an update builder over `config`.
    #[must_use]
    pub const fn new(config: &'a BufferConfig) -> Self {
        Self { config }
    }

    /// Builds the UPDATE statement and returns SQL with parameters.
    #[must_use]
    pub fn build(self, update: &Update) -> (String, Vec<Value>) {
        let mut buffer = self.config.buffer();
        buffer.push_str("UPDATE ");
        buffer.push_id(&update.table);
        buffer.push_str(" SET ");

        for (i, mutate) in update.mutates.iter().enumerate() {
            if i > 0 {
                buffer.push_str(", ");
            }
            match mutate {
                Mutate::Set(field, value) => {
                    buffer.push_id(field);
                    buffer.push_str(" = ");
                    buffer.push_value(value);
                }
                Mutate::Inc(field, n) => {
                    buffer.push_id(field);
                    buffer.push_str(" = ");
                    buffer.push_id(field);
                    buffer.push_str(" + ");
                    buffer.push_value(&Value::Int(*n));
                }
                Mutate::Fragment(sql, values) => buffer.push_fragment(sql, values),
            }
        }

        if !update.filter.is_empty() {
            buffer.push_str(" WHERE ");
            FilterBuilder.write(&mut buffer, &update.filter);
        }

        buffer.into_parts()
    }
}
