//! Table DDL rendering.
//!
//! DDL cannot take bound arguments, so everything here writes through the
//! dialect's inline buffer configuration.

use tracing::debug;

use super::buffer::Buffer;
use crate::dialect::Dialect;
use crate::schema::{Column, Key, KeyKind, SchemaOp, Table, TableDefinition};

/// Renders [`Table`] descriptors for a dialect.
#[derive(Debug)]
pub struct TableBuilder<'a, D: Dialect + ?Sized> {
    dialect: &'a D,
}

impl<D: Dialect + ?Sized> Clone for TableBuilder<'_, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D: Dialect + ?Sized> Copy for TableBuilder<'_, D> {}

impl<'a, D: Dialect + ?Sized> TableBuilder<'a, D> {
    /// Creates a table builder for `dialect`.
    #[must_use]
    pub const fn new(dialect: &'a D) -> Self {
        Self { dialect }
    }

    /// Builds the DDL for `table`.
    ///
    /// Alter tables produce one statement per definition kept by the
    /// dialect's definition filter, each terminated by `;`.
    #[must_use]
    pub fn build(self, table: &Table) -> String {
        let mut buffer = self.dialect.config().ddl_buffer.buffer();
        match table.op {
            SchemaOp::Create => self.write_create(&mut buffer, table),
            SchemaOp::Alter => self.write_alter(&mut buffer, table),
            SchemaOp::Rename => Self::write_rename(&mut buffer, table),
            SchemaOp::Drop => Self::write_drop(&mut buffer, table),
        }
        buffer.into_sql()
    }

    fn write_create(self, buffer: &mut Buffer<'_>, table: &Table) {
        buffer.push_str("CREATE TABLE ");
        if table.optional {
            buffer.push_str("IF NOT EXISTS ");
        }
        buffer.push_id(&table.name);
        buffer.push_str(" (");

        let mut first = true;
        for definition in &table.definitions {
            if !self.dialect.filter_definition(table, definition) {
                continue;
            }
            if !first {
                buffer.push_str(", ");
            }
            first = false;
            match definition {
                TableDefinition::Column(column) => self.write_column(buffer, column),
                TableDefinition::Key(key) => Self::write_key(buffer, key),
            }
        }

        buffer.push(')');
        Self::write_options(buffer, &table.options);
        buffer.push(';');
    }

    fn write_alter(self, buffer: &mut Buffer<'_>, table: &Table) {
        let config = &self.dialect.config().ddl_buffer;
        for definition in &table.definitions {
            if !self.dialect.filter_definition(table, definition) {
                continue;
            }

            let mut clause = config.buffer();
            match definition {
                TableDefinition::Column(column) => self.write_alter_column(&mut clause, column),
                TableDefinition::Key(key) => Self::write_alter_key(&mut clause, key),
            }
            if clause.is_empty() {
                continue;
            }

            buffer.push_str("ALTER TABLE ");
            buffer.push_id(&table.name);
            buffer.push(' ');
            buffer.push_str(clause.sql());
            Self::write_options(buffer, &table.options);
            buffer.push(';');
        }
    }

    fn write_alter_column(self, buffer: &mut Buffer<'_>, column: &Column) {
        match column.op {
            SchemaOp::Create => {
                buffer.push_str("ADD COLUMN ");
                self.write_column(buffer, column);
            }
            SchemaOp::Rename => {
                let Some(to) = column.rename.as_deref() else {
                    debug!(column = %column.name, "rename without a target name skipped");
                    return;
                };
                buffer.push_str("RENAME COLUMN ");
                buffer.push_id(&column.name);
                buffer.push_str(" TO ");
                buffer.push_id(to);
            }
            SchemaOp::Drop => {
                buffer.push_str("DROP COLUMN ");
                buffer.push_id(&column.name);
            }
            SchemaOp::Alter => {
                debug!(column = %column.name, "column alteration has no portable clause, skipped");
            }
        }
    }

    fn write_alter_key(buffer: &mut Buffer<'_>, key: &Key) {
        match (key.op, key.name.as_deref()) {
            (SchemaOp::Create, _) => {
                buffer.push_str("ADD ");
                Self::write_key(buffer, key);
            }
            (SchemaOp::Drop, Some(name)) => {
                buffer.push_str("DROP CONSTRAINT ");
                buffer.push_id(name);
            }
            _ => debug!(kind = ?key.kind, "key change has no portable clause, skipped"),
        }
    }

    fn write_rename(buffer: &mut Buffer<'_>, table: &Table) {
        let Some(to) = table.rename.as_deref() else {
            debug!(table = %table.name, "rename without a target name skipped");
            return;
        };
        buffer.push_str("ALTER TABLE ");
        buffer.push_id(&table.name);
        buffer.push_str(" RENAME TO ");
        buffer.push_id(to);
        buffer.push(';');
    }

    fn write_drop(buffer: &mut Buffer<'_>, table: &Table) {
        buffer.push_str("DROP TABLE ");
        if table.optional {
            buffer.push_str("IF EXISTS ");
        }
        buffer.push_id(&table.name);
        buffer.push(';');
    }

    /// Writes `"name" TYPE[ options][ DEFAULT v][ raw options]`.
    fn write_column(self, buffer: &mut Buffer<'_>, column: &Column) {
        buffer.push_id(&column.name);
        buffer.push(' ');
        buffer.push_str(&self.dialect.map_column(column).to_string());

        let options = self.dialect.column_options(column);
        if !options.is_empty() {
            buffer.push(' ');
            buffer.push_str(&options);
        }

        if let Some(default) = &column.default {
            buffer.push_str(" DEFAULT ");
            buffer.push_value(default);
        }

        Self::write_options(buffer, &column.options);
    }

    fn write_key(buffer: &mut Buffer<'_>, key: &Key) {
        if let Some(name) = &key.name {
            buffer.push_str("CONSTRAINT ");
            buffer.push_id(name);
            buffer.push(' ');
        }

        buffer.push_str(match key.kind {
            KeyKind::Primary => "PRIMARY KEY (",
            KeyKind::Unique => "UNIQUE (",
            KeyKind::Foreign => "FOREIGN KEY (",
        });
        buffer.push_ids(&key.columns);
        buffer.push(')');

        if let Some(reference) = &key.reference {
            buffer.push_str(" REFERENCES ");
            buffer.push_id(&reference.table);
            buffer.push_str(" (");
            buffer.push_ids(&reference.columns);
            buffer.push(')');
            if let Some(action) = &reference.on_delete {
                buffer.push_str(" ON DELETE ");
                buffer.push_str(action);
            }
            if let Some(action) = &reference.on_update {
                buffer.push_str(" ON UPDATE ");
                buffer.push_str(action);
            }
        }

        Self::write_options(buffer, &key.options);
    }

    fn write_options(buffer: &mut Buffer<'_>, options: &str) {
        if !options.is_empty() {
            buffer.push(' ');
            buffer.push_str(options);
        }
    }
}
