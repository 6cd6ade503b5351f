//! SELECT query descriptors.

use super::FilterQuery;

/// One ORDER BY term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortQuery {
    /// Ascending.
    Asc(String),
    /// Descending.
    Desc(String),
}

/// A SELECT over one table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Query {
    /// Source table.
    pub table: String,
    /// SELECT DISTINCT.
    pub distinct: bool,
    /// Selected fields; empty selects `*`.
    pub fields: Vec<String>,
    /// WHERE condition.
    pub filter: FilterQuery,
    /// GROUP BY fields.
    pub group: Vec<String>,
    /// ORDER BY terms.
    pub sort: Vec<SortQuery>,
    /// LIMIT.
    pub limit: Option<u64>,
    /// OFFSET.
    pub offset: Option<u64>,
}

impl Query {
    /// Creates a query selecting every field of `table`.
    #[must_use]
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Selects the given fields.
    #[must_use]
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(ToString::to_string).collect();
        self
    }

    /// Selects distinct rows.
    #[must_use]
    pub const fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// ANDs `filter` into the WHERE condition.
    #[must_use]
    pub fn filter(mut self, filter: FilterQuery) -> Self {
        self.filter = std::mem::take(&mut self.filter).and(filter);
        self
    }

    /// Groups by the given fields.
    #[must_use]
    pub fn group(mut self, fields: &[&str]) -> Self {
        self.group = fields.iter().map(ToString::to_string).collect();
        self
    }

    /// Appends an ascending sort.
    #[must_use]
    pub fn sort_asc(mut self, field: &str) -> Self {
        self.sort.push(SortQuery::Asc(field.to_string()));
        self
    }

    /// Appends a descending sort.
    #[must_use]
    pub fn sort_desc(mut self, field: &str) -> Self {
        self.sort.push(SortQuery::Desc(field.to_string()));
        self
    }

    /// Sets LIMIT.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets OFFSET.
    #[must_use]
    pub const fn offset(mut self, offset: u64) -> Self {
        self.offset = Some(offset);
        self
    }
}
