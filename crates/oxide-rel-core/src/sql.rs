//! The builder set assembled for one dialect.

use crate::builder::{
    DeleteBuilder, IndexBuilder, InsertAllBuilder, InsertBuilder, OnConflictBuilder,
    QueryBuilder, TableBuilder, UpdateBuilder,
};
use crate::dialect::Dialect;
use crate::query::{Delete, Insert, InsertAll, Query, Update};
use crate::schema::{Index, Table};
use crate::value::Value;

/// SQL generation for a dialect.
///
/// Owns the dialect and hands out builder views over it per call.
#[derive(Debug, Clone, Default)]
pub struct Sql<D> {
    dialect: D,
}

impl<D: Dialect> Sql<D> {
    /// Assembles the builders for `dialect`.
    #[must_use]
    pub const fn new(dialect: D) -> Self {
        Self { dialect }
    }

    /// Returns the dialect.
    #[must_use]
    pub const fn dialect(&self) -> &D {
        &self.dialect
    }

    fn on_conflict(&self) -> OnConflictBuilder<'_> {
        OnConflictBuilder::new(&self.dialect.config().on_conflict)
    }

    /// Builds a SELECT.
    #[must_use]
    pub fn query(&self, query: &Query) -> (String, Vec<Value>) {
        QueryBuilder::new(&self.dialect.config().buffer).build(query)
    }

    /// Builds a single-row INSERT.
    #[must_use]
    pub fn insert(&self, insert: &Insert) -> (String, Vec<Value>) {
        let config = self.dialect.config();
        InsertBuilder::new(
            &config.buffer,
            self.on_conflict(),
            config.insert_default_values,
        )
        .build(insert)
    }

    /// Builds a multi-row INSERT.
    #[must_use]
    pub fn insert_all(&self, insert: &InsertAll) -> (String, Vec<Value>) {
        InsertAllBuilder::new(&self.dialect.config().buffer, self.on_conflict()).build(insert)
    }

    /// Builds an UPDATE.
    #[must_use]
    pub fn update(&self, update: &Update) -> (String, Vec<Value>) {
        UpdateBuilder::new(&self.dialect.config().buffer).build(update)
    }

    /// Builds a DELETE.
    #[must_use]
    pub fn delete(&self, delete: &Delete) -> (String, Vec<Value>) {
        DeleteBuilder::new(&self.dialect.config().buffer).build(delete)
    }

    /// Builds table DDL.
    #[must_use]
    pub fn table(&self, table: &Table) -> String {
        TableBuilder::new(&self.dialect).build(table)
    }

    /// Builds index DDL.
    #[must_use]
    pub fn index(&self, index: &Index) -> String {
        IndexBuilder::new(&self.dialect).build(index)
    }

    /// Derives the ids of `count` rows inserted by one multi-row insert
    /// from the last insert id the driver reported.
    ///
    /// A negative increment means `last_id` belongs to the last row, so the
    /// ids run backwards from it; otherwise it belongs to the first row.
    #[must_use]
    pub fn insert_all_ids(&self, last_id: i64, count: usize) -> Vec<i64> {
        let increment = self.dialect.increment();
        let step = increment.abs();
        let count = i64::try_from(count).unwrap_or(i64::MAX);
        let first = if increment < 0 {
            last_id - (count - 1).max(0) * step
        } else {
            last_id
        };
        (0..count).map(|i| first + i * step).collect()
    }
}
