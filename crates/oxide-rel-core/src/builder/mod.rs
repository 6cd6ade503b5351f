//! Dialect-agnostic SQL builders.
//!
//! Each builder is a borrowed view over a dialect's configuration and holds
//! no state of its own. DML builders return SQL together with the values to
//! bind; DDL builders return SQL with values rendered inline.

mod buffer;
mod column;
mod delete;
mod filter;
mod index;
mod insert;
mod query;
mod table;
mod update;

pub use buffer::{Buffer, BufferConfig, Quoter};
pub use column::{column_options, map_column, ColumnSqlType, DEFAULT_STRING_LIMIT};
pub use delete::DeleteBuilder;
pub use filter::FilterBuilder;
pub use index::IndexBuilder;
pub use insert::{InsertAllBuilder, InsertBuilder, OnConflictBuilder};
pub use query::QueryBuilder;
pub use table::TableBuilder;
pub use update::UpdateBuilder;
