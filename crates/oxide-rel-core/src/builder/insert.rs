//! INSERT rendering, including multi-row inserts and conflict clauses.

use tracing::{debug, warn};

use super::buffer::{Buffer, BufferConfig};
use crate::dialect::OnConflictConfig;
use crate::query::{ConflictAction, Insert, InsertAll, OnConflict};
use crate::value::Value;

/// Renders conflict clauses.
#[derive(Debug, Clone, Copy)]
pub struct OnConflictBuilder<'a> {
    config: &'a OnConflictConfig,
}

impl<'a> OnConflictBuilder<'a> {
    /// Creates a conflict clause builder over `config`.
    #[must_use]
    pub const fn new(config: &'a OnConflictConfig) -> Self {
        Self { config }
    }

    /// Writes the conflict clause for an insert of `fields`.
    ///
    /// Inserts without fields get no clause: there is nothing to update and
    /// `DEFAULT VALUES` takes no conflict target.
    pub fn write(self, buffer: &mut Buffer<'_>, on_conflict: &OnConflict, fields: &[String]) {
        if on_conflict.action == ConflictAction::Fail {
            return;
        }
        if fields.is_empty() {
            debug!(action = ?on_conflict.action, "conflict clause skipped for insert without fields");
            return;
        }

        buffer.push(' ');
        buffer.push_str(&self.config.statement);
        if self.config.support_key && !on_conflict.keys.is_empty() {
            buffer.push_str(" (");
            buffer.push_ids(&on_conflict.keys);
            buffer.push(')');
        }
        buffer.push(' ');

        match on_conflict.action {
            ConflictAction::Ignore => buffer.push_str(&self.config.ignore),
            ConflictAction::Replace => {
                buffer.push_str(&self.config.update);
                buffer.push(' ');
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        buffer.push_str(", ");
                    }
                    buffer.push_id(field);
                    buffer.push_str(" = ");
                    buffer.push_str(&self.config.table_qualifier);
                    buffer.push('.');
                    buffer.push_id(field);
                }
            }
            ConflictAction::Fail => {}
        }
    }
}

/// Renders single-row [`Insert`] descriptors.
#[derive(Debug, Clone, Copy)]
pub struct InsertBuilder<'a> {
    config: &'a BufferConfig,
    on_conflict: OnConflictBuilder<'a>,
    default_values: bool,
}

impl<'a> InsertBuilder<'a> {
    /// Creates an insert builder.
    ///
    /// With `default_values`, an insert without fields renders as
    /// `DEFAULT VALUES` instead of an empty column list.
    #[must_use]
    pub const fn new(
        config: &'a BufferConfig,
        on_conflict: OnConflictBuilder<'a>,
        default_values: bool,
    ) -> Self {
        Self {
            config,
            on_conflict,
            default_values,
        }
    }

    /// Builds the INSERT statement and returns SQL with parameters.
    #[must_use]
    pub fn build(self, insert: &Insert) -> (String, Vec<Value>) {
        let mut buffer = self.config.buffer();
        buffer.push_str("INSERT INTO ");
        buffer.push_id(&insert.table);

        let fields: Vec<String> = insert.fields.iter().map(|(f, _)| f.clone()).collect();
        if fields.is_empty() && self.default_values {
            buffer.push_str(" DEFAULT VALUES");
        } else {
            buffer.push_str(" (");
            buffer.push_ids(&fields);
            buffer.push_str(") VALUES (");
            for (i, (_, value)) in insert.fields.iter().enumerate() {
                if i > 0 {
                    buffer.push_str(", ");
                }
                buffer.push_value(value);
            }
            buffer.push(')');
        }

        self.on_conflict
            .write(&mut buffer, &insert.on_conflict, &fields);
        buffer.into_parts()
    }
}

/// Renders multi-row [`InsertAll`] descriptors.
#[derive(Debug, Clone, Copy)]
pub struct InsertAllBuilder<'a> {
    config: &'a BufferConfig,
    on_conflict: OnConflictBuilder<'a>,
}

impl<'a> InsertAllBuilder<'a> {
    /// Creates a multi-row insert builder.
    #[must_use]
    pub const fn new(config: &'a BufferConfig, on_conflict: OnConflictBuilder<'a>) -> Self {
        Self {
            config,
            on_conflict,
        }
    }

    /// Builds the INSERT statement and returns SQL with parameters.
    ///
    /// Rows shorter than the field list are padded with `DEFAULT`. Rows
    /// longer than the field list keep every value, so the database rejects
    /// the statement instead of silently losing data.
    #[must_use]
    pub fn build(self, insert: &InsertAll) -> (String, Vec<Value>) {
        let mut buffer = self.config.buffer();
        buffer.push_str("INSERT INTO ");
        buffer.push_id(&insert.table);
        buffer.push_str(" (");
        buffer.push_ids(&insert.fields);
        buffer.push_str(") VALUES ");

        for (i, row) in insert.rows.iter().enumerate() {
            if i > 0 {
                buffer.push_str(", ");
            }
            if row.len() > insert.fields.len() {
                warn!(
                    table = %insert.table,
                    row = i,
                    fields = insert.fields.len(),
                    values = row.len(),
                    "row has more values than fields"
                );
            }
            buffer.push('(');
            for j in 0..insert.fields.len().max(row.len()) {
                if j > 0 {
                    buffer.push_str(", ");
                }
                match row.get(j) {
                    Some(value) => buffer.push_value(value),
                    None => buffer.push_str("DEFAULT"),
                }
            }
            buffer.push(')');
        }

        self.on_conflict
            .write(&mut buffer, &insert.on_conflict, &insert.fields);
        buffer.into_parts()
    }
}
