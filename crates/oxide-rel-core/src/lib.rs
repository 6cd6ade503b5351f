//! # oxide-rel-core
//!
//! The dialect-agnostic side of a relational mapping layer.
//!
//! This crate provides:
//! - Descriptors for schema changes ([`schema`]) and queries ([`query`])
//! - A [`Dialect`] trait carrying a dialect's constants and hooks
//! - Generic SQL builders driven by those constants ([`builder`], [`Sql`])
//! - The error taxonomy adapters report in ([`Error`])
//!
//! ## Building SQL
//!
//! DML is parameterized, DDL renders values inline:
//!
//! ```rust
//! use oxide_rel_core::query::{FilterQuery, Query};
//! use oxide_rel_core::{GenericDialect, Sql, Value};
//!
//! let sql = Sql::new(GenericDialect::new());
//! let (text, args) = sql.query(
//!     &Query::from("users")
//!         .select(&["id", "name"])
//!         .filter(FilterQuery::eq("name", "'; DROP TABLE users; --")),
//! );
//!
//! assert_eq!(text, "SELECT \"id\", \"name\" FROM \"users\" WHERE \"name\" = ?");
//! assert_eq!(args, vec![Value::from("'; DROP TABLE users; --")]);
//! ```

pub mod builder;
pub mod dialect;
mod error;
pub mod query;
pub mod schema;
mod sql;
mod value;

pub use dialect::{Dialect, DialectConfig, GenericDialect, OnConflictConfig};
pub use error::{BoxError, ConstraintError, ConstraintKind, DriverError, Error, Result};
pub use sql::Sql;
pub use value::{Value, TIMESTAMP_FORMAT};
