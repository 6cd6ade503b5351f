//! # oxide-rel-sqlite
//!
//! SQLite dialect adapter for `oxide-rel-core`.
//!
//! # How SQLite differs from the generic dialect
//!
//! - **[Type affinity]**: identity columns are declared `INTEGER` so that a
//!   `PRIMARY KEY` column aliases the rowid, and `Int` columns keep their
//!   display width as `INTEGER(n)`. `UNSIGNED` is accepted but not enforced.
//! - **[AUTOINCREMENT]**: identity primary keys are written
//!   `PRIMARY KEY AUTOINCREMENT`.
//! - **Limited [ALTER TABLE]**: SQLite can add, rename and drop columns but
//!   cannot add or drop table constraints. Key definitions inside an alter
//!   table are skipped with a warning instead of failing the migration.
//! - **[UPSERT]**: `ON CONFLICT ("k") DO NOTHING` and
//!   `DO UPDATE SET "a" = EXCLUDED."a"`.
//! - **Booleans** are written `1` and `0`, and inserts without fields use
//!   `DEFAULT VALUES`.
//! - **[Partial indexes]** accept a `WHERE` predicate.
//! - **Errors**: SQLite reports constraint violations as text such as
//!   `UNIQUE constraint failed: users.email`. Unique and check violations
//!   are classified into [`oxide_rel_core::ConstraintError`].
//!
//! [Type affinity]: https://www.sqlite.org/datatype3.html
//! [AUTOINCREMENT]: https://www.sqlite.org/autoinc.html
//! [ALTER TABLE]: https://www.sqlite.org/lang_altertable.html
//! [UPSERT]: https://www.sqlite.org/lang_upsert.html
//! [Partial indexes]: https://www.sqlite.org/partialindex.html
//!
//! ## Example
//!
//! ```rust
//! use oxide_rel_core::schema::{Column, ColumnType, Table};
//! use oxide_rel_core::Sql;
//! use oxide_rel_sqlite::SqliteDialect;
//!
//! let sql = Sql::new(SqliteDialect::new());
//! let ddl = sql.table(
//!     &Table::create("users")
//!         .column(Column::new("id", ColumnType::Id).primary())
//!         .column(Column::new("active", ColumnType::Bool).default_value(true)),
//! );
//!
//! assert_eq!(
//!     ddl,
//!     "CREATE TABLE \"users\" (\"id\" INTEGER PRIMARY KEY AUTOINCREMENT, \"active\" BOOL DEFAULT 1);"
//! );
//! ```

mod adapter;
pub mod column;
mod config;
pub mod definition;
mod dialect;
pub mod error;

pub use adapter::{ExecResult, SqliteAdapter};
pub use config::{SqliteConfig, DATABASE_ENV};
pub use dialect::SqliteDialect;
