//! Table definition filtering.
//!
//! SQLite's ALTER TABLE cannot add or drop constraints. Key definitions
//! inside an alter table are skipped and logged so that the rest of the
//! alteration still applies.

use oxide_rel_core::schema::{SchemaOp, Table, TableDefinition};
use tracing::warn;

/// Returns whether `definition` should be rendered as part of `table`.
#[must_use]
pub fn filter_definition(table: &Table, definition: &TableDefinition) -> bool {
    match (table.op, definition) {
        (SchemaOp::Alter, TableDefinition::Key(key)) => {
            warn!(
                table = %table.name,
                kind = ?key.kind,
                key = key.name.as_deref().unwrap_or_default(),
                columns = ?key.columns,
                "SQLite cannot alter table keys, key definition skipped"
            );
            false
        }
        _ => true,
    }
}
