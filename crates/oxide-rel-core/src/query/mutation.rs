//! INSERT, UPDATE and DELETE descriptors.

use super::FilterQuery;
use crate::value::Value;

/// What to do when an insert hits a conflicting row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictAction {
    /// Let the statement fail.
    #[default]
    Fail,
    /// Skip the conflicting row.
    Ignore,
    /// Overwrite the conflicting row with the inserted values.
    Replace,
}

/// Conflict handling for inserts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OnConflict {
    /// Conflict target columns.
    pub keys: Vec<String>,
    /// Action taken on conflict.
    pub action: ConflictAction,
}

impl OnConflict {
    /// Ignore conflicts on `keys`.
    #[must_use]
    pub fn ignore(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(ToString::to_string).collect(),
            action: ConflictAction::Ignore,
        }
    }

    /// Replace conflicting rows on `keys`.
    #[must_use]
    pub fn replace(keys: &[&str]) -> Self {
        Self {
            keys: keys.iter().map(ToString::to_string).collect(),
            action: ConflictAction::Replace,
        }
    }
}

/// A single-row INSERT.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Insert {
    /// Target table.
    pub table: String,
    /// Field/value pairs in column order.
    pub fields: Vec<(String, Value)>,
    /// Conflict handling.
    pub on_conflict: OnConflict,
}

impl Insert {
    /// Creates an insert into `table`.
    #[must_use]
    pub fn into_table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Sets a field.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.fields.push((field.to_string(), value.into()));
        self
    }

    /// Sets conflict handling.
    #[must_use]
    pub fn on_conflict(mut self, on_conflict: OnConflict) -> Self {
        self.on_conflict = on_conflict;
        self
    }
}

/// A multi-row INSERT sharing one field list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InsertAll {
    /// Target table.
    pub table: String,
    /// Field names.
    pub fields: Vec<String>,
    /// Rows, each with one value per field.
    pub rows: Vec<Vec<Value>>,
    /// Conflict handling.
    pub on_conflict: OnConflict,
}

impl InsertAll {
    /// Creates a multi-row insert into `table` over `fields`.
    #[must_use]
    pub fn into_table(table: impl Into<String>, fields: &[&str]) -> Self {
        Self {
            table: table.into(),
            fields: fields.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    /// Appends a row.
    #[must_use]
    pub fn row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(values);
        self
    }

    /// Sets conflict handling.
    #[must_use]
    pub fn on_conflict(mut self, on_conflict: OnConflict) -> Self {
        self.on_conflict = on_conflict;
        self
    }
}

/// One assignment in an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutate {
    /// field = value
    Set(String, Value),
    /// field = field + n (negative n decrements)
    Inc(String, i64),
    /// Raw SQL assignment with its own placeholders.
    Fragment(String, Vec<Value>),
}

/// An UPDATE.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Update {
    /// Target table.
    pub table: String,
    /// Assignments.
    pub mutates: Vec<Mutate>,
    /// WHERE condition.
    pub filter: FilterQuery,
}

impl Update {
    /// Creates an update of `table`.
    #[must_use]
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Assigns a value.
    #[must_use]
    pub fn set(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.mutates.push(Mutate::Set(field.to_string(), value.into()));
        self
    }

    /// Increments (or, with a negative `n`, decrements) a field.
    #[must_use]
    pub fn inc(mut self, field: &str, n: i64) -> Self {
        self.mutates.push(Mutate::Inc(field.to_string(), n));
        self
    }

    /// ANDs `filter` into the WHERE condition.
    #[must_use]
    pub fn filter(mut self, filter: FilterQuery) -> Self {
        self.filter = std::mem::take(&mut self.filter).and(filter);
        self
    }
}

/// A DELETE.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Delete {
    /// Target table.
    pub table: String,
    /// WHERE condition.
    pub filter: FilterQuery,
}

impl Delete {
    /// Creates a delete from `table`.
    #[must_use]
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// ANDs `filter` into the WHERE condition.
    #[must_use]
    pub fn filter(mut self, filter: FilterQuery) -> Self {
        self.filter = std::mem::take(&mut self.filter).and(filter);
        self
    }
}
