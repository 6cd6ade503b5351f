//! Schema descriptors.
//!
//! Tables, columns, keys and indexes as handed to a dialect's DDL builders.
//! Descriptors are built per call and only read by the adapter.

mod column;
mod index;
mod key;
mod table;

pub use column::{Column, ColumnType};
pub use index::Index;
pub use key::{ForeignKeyReference, Key, KeyKind};
pub use table::{Table, TableDefinition};

/// The schema operation a descriptor stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemaOp {
    /// CREATE, or ADD inside an alter.
    #[default]
    Create,
    /// RENAME.
    Rename,
    /// ALTER.
    Alter,
    /// DROP.
    Drop,
}
