//! `sqlx`-backed execution.
//!
//! The adapter renders descriptors with [`Sql<SqliteDialect>`], executes them
//! on a `SqlitePool` and routes every failure through the dialect's error
//! classification.

use oxide_rel_core::query::{Delete, Insert, InsertAll, Query, Update};
use oxide_rel_core::schema::{Index, Table};
use oxide_rel_core::{Dialect, Result, Sql, Value};
use sqlx::sqlite::{Sqlite, SqliteArguments, SqlitePool, SqlitePoolOptions, SqliteRow};
use tracing::{debug, info};

use crate::config::SqliteConfig;
use crate::dialect::SqliteDialect;
use crate::error::from_sqlx;

type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Outcome of a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecResult {
    /// Rowid of the last inserted row.
    pub last_insert_id: i64,
    /// Rows changed by the statement.
    pub rows_affected: u64,
}

/// Executes descriptors against a SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteAdapter {
    sql: Sql<SqliteDialect>,
    pool: SqlitePool,
}

impl SqliteAdapter {
    /// Wraps an existing pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            sql: Sql::new(SqliteDialect::new()),
            pool,
        }
    }

    /// Opens a pool as described by `config`.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the database cannot be opened.
    pub async fn open(config: &SqliteConfig) -> Result<Self> {
        let options = config.connect_options()?;
        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await
            .map_err(from_sqlx)?;

        info!(
            database = %config.database,
            max_connections = config.max_connections,
            "Opened SQLite pool"
        );
        Ok(Self::new(pool))
    }

    /// Opens `dsn` with default settings otherwise.
    ///
    /// # Errors
    ///
    /// Returns a driver error if the database cannot be opened.
    pub async fn open_dsn(dsn: &str) -> Result<Self> {
        Self::open(&SqliteConfig {
            database: dsn.to_string(),
            ..SqliteConfig::default()
        })
        .await
    }

    /// Returns the SQL builders.
    #[must_use]
    pub const fn sql(&self) -> &Sql<SqliteDialect> {
        &self.sql
    }

    /// Returns the underlying pool.
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Executes a statement with bound arguments.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn exec(&self, sql: &str, args: &[Value]) -> Result<ExecResult> {
        debug!(sql = %sql, args = args.len(), "Executing SQL");
        let result = bind_all(sqlx::query(sql), args)
            .execute(&self.pool)
            .await
            .map_err(from_sqlx);

        let done = self.sql.dialect().map_result(result)?;
        Ok(ExecResult {
            last_insert_id: done.last_insert_rowid(),
            rows_affected: done.rows_affected(),
        })
    }

    /// Runs a SELECT and returns every row.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn fetch_all(&self, query: &Query) -> Result<Vec<SqliteRow>> {
        let (sql, args) = self.sql.query(query);
        debug!(sql = %sql, args = args.len(), "Fetching rows");
        let result = bind_all(sqlx::query(&sql), &args)
            .fetch_all(&self.pool)
            .await
            .map_err(from_sqlx);
        self.sql.dialect().map_result(result)
    }

    /// Inserts one row and returns its id.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn insert(&self, insert: &Insert) -> Result<i64> {
        let (sql, args) = self.sql.insert(insert);
        Ok(self.exec(&sql, &args).await?.last_insert_id)
    }

    /// Inserts every row and returns their ids in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn insert_all(&self, insert: &InsertAll) -> Result<Vec<i64>> {
        if insert.rows.is_empty() {
            return Ok(Vec::new());
        }
        let (sql, args) = self.sql.insert_all(insert);
        let result = self.exec(&sql, &args).await?;
        Ok(self
            .sql
            .insert_all_ids(result.last_insert_id, insert.rows.len()))
    }

    /// Updates rows and returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn update(&self, update: &Update) -> Result<u64> {
        if update.mutates.is_empty() {
            debug!(table = %update.table, "Nothing to update");
            return Ok(0);
        }
        let (sql, args) = self.sql.update(update);
        Ok(self.exec(&sql, &args).await?.rows_affected)
    }

    /// Deletes rows and returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn delete(&self, delete: &Delete) -> Result<u64> {
        let (sql, args) = self.sql.delete(delete);
        Ok(self.exec(&sql, &args).await?.rows_affected)
    }

    /// Applies table DDL, which may span several statements.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn apply_table(&self, table: &Table) -> Result<()> {
        let sql = self.sql.table(table);
        self.exec_ddl(&sql).await
    }

    /// Applies index DDL.
    ///
    /// # Errors
    ///
    /// Returns the classified driver error.
    pub async fn apply_index(&self, index: &Index) -> Result<()> {
        let sql = self.sql.index(index);
        self.exec_ddl(&sql).await
    }

    /// Closes the pool, waiting for connections to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    async fn exec_ddl(&self, sql: &str) -> Result<()> {
        if sql.is_empty() {
            debug!("No DDL to apply");
            return Ok(());
        }
        debug!(sql = %sql, "Executing DDL");
        let result = sqlx::raw_sql(sql)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(from_sqlx);
        self.sql.dialect().map_result(result)
    }
}

fn bind_all<'q>(mut query: SqliteQuery<'q>, args: &[Value]) -> SqliteQuery<'q> {
    for value in args {
        query = match value {
            Value::Null => query.bind(None::<i64>),
            Value::Bool(b) => query.bind(*b),
            Value::Int(n) => query.bind(*n),
            Value::Float(f) => query.bind(*f),
            Value::Text(s) => query.bind(s.clone()),
            Value::Blob(b) => query.bind(b.clone()),
            Value::Timestamp(t) => query.bind(*t),
        };
    }
    query
}
