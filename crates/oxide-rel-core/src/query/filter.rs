//! Filter descriptors.
//!
//! A [`FilterQuery`] is a tree of conditions combined with AND, OR and NOT.
//! The empty AND is the "no filter" value and renders nothing.

use crate::value::Value;

/// A filter condition.
///
/// # Example
///
/// ```rust
/// use oxide_rel_core::query::FilterQuery;
///
/// let filter = FilterQuery::eq("status", "active")
///     .and(FilterQuery::gt("age", 18).or(FilterQuery::eq("verified", true)));
/// assert!(!filter.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum FilterQuery {
    /// All inner conditions hold.
    And(Vec<FilterQuery>),
    /// Any inner condition holds.
    Or(Vec<FilterQuery>),
    /// None of the inner conditions hold.
    Not(Vec<FilterQuery>),
    /// field = value
    Eq(String, Value),
    /// field <> value
    Ne(String, Value),
    /// field < value
    Lt(String, Value),
    /// field <= value
    Lte(String, Value),
    /// field > value
    Gt(String, Value),
    /// field >= value
    Gte(String, Value),
    /// field IS NULL
    Nil(String),
    /// field IS NOT NULL
    NotNil(String),
    /// field IN (values)
    In(String, Vec<Value>),
    /// field NOT IN (values)
    Nin(String, Vec<Value>),
    /// field LIKE pattern
    Like(String, String),
    /// field NOT LIKE pattern
    NotLike(String, String),
    /// Raw SQL with its own placeholders.
    Fragment(String, Vec<Value>),
}

impl Default for FilterQuery {
    fn default() -> Self {
        Self::And(Vec::new())
    }
}

impl FilterQuery {
    /// field = value
    #[must_use]
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Self::Eq(field.to_string(), value.into())
    }

    /// field <> value
    #[must_use]
    pub fn ne(field: &str, value: impl Into<Value>) -> Self {
        Self::Ne(field.to_string(), value.into())
    }

    /// field < value
    #[must_use]
    pub fn lt(field: &str, value: impl Into<Value>) -> Self {
        Self::Lt(field.to_string(), value.into())
    }

    /// field <= value
    #[must_use]
    pub fn lte(field: &str, value: impl Into<Value>) -> Self {
        Self::Lte(field.to_string(), value.into())
    }

    /// field > value
    #[must_use]
    pub fn gt(field: &str, value: impl Into<Value>) -> Self {
        Self::Gt(field.to_string(), value.into())
    }

    /// field >= value
    #[must_use]
    pub fn gte(field: &str, value: impl Into<Value>) -> Self {
        Self::Gte(field.to_string(), value.into())
    }

    /// field IS NULL
    #[must_use]
    pub fn is_null(field: &str) -> Self {
        Self::Nil(field.to_string())
    }

    /// field IS NOT NULL
    #[must_use]
    pub fn is_not_null(field: &str) -> Self {
        Self::NotNil(field.to_string())
    }

    /// field IN (values)
    #[must_use]
    pub fn in_list<V: Into<Value>>(field: &str, values: Vec<V>) -> Self {
        Self::In(field.to_string(), values.into_iter().map(Into::into).collect())
    }

    /// field NOT IN (values)
    #[must_use]
    pub fn not_in_list<V: Into<Value>>(field: &str, values: Vec<V>) -> Self {
        Self::Nin(field.to_string(), values.into_iter().map(Into::into).collect())
    }

    /// field LIKE pattern
    #[must_use]
    pub fn like(field: &str, pattern: &str) -> Self {
        Self::Like(field.to_string(), pattern.to_string())
    }

    /// field NOT LIKE pattern
    #[must_use]
    pub fn not_like(field: &str, pattern: &str) -> Self {
        Self::NotLike(field.to_string(), pattern.to_string())
    }

    /// Raw SQL fragment (use with caution).
    #[must_use]
    pub fn fragment(sql: &str, values: Vec<Value>) -> Self {
        Self::Fragment(sql.to_string(), values)
    }

    /// Returns whether this is the empty filter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::And(inner) if inner.is_empty())
    }

    /// Combines with AND, flattening nested ANDs and dropping empty filters.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match (self, other) {
            (lhs, rhs) if rhs.is_empty() => lhs,
            (lhs, rhs) if lhs.is_empty() => rhs,
            (Self::And(mut inner), Self::And(more)) => {
                inner.extend(more);
                Self::And(inner)
            }
            (Self::And(mut inner), rhs) => {
                inner.push(rhs);
                Self::And(inner)
            }
            (lhs, rhs) => Self::And(vec![lhs, rhs]),
        }
    }

    /// Combines with OR, flattening nested ORs.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        match (self, other) {
            (lhs, rhs) if rhs.is_empty() => lhs,
            (lhs, rhs) if lhs.is_empty() => rhs,
            (Self::Or(mut inner), rhs) => {
                inner.push(rhs);
                Self::Or(inner)
            }
            (lhs, rhs) => Self::Or(vec![lhs, rhs]),
        }
    }
}

impl std::ops::Not for FilterQuery {
    type Output = Self;

    fn not(self) -> Self {
        Self::Not(vec![self])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(FilterQuery::default().is_empty());
        assert!(!FilterQuery::eq("id", 1).is_empty());
    }

    #[test]
    fn test_and_flattens() {
        let filter = FilterQuery::eq("a", 1)
            .and(FilterQuery::eq("b", 2))
            .and(FilterQuery::eq("c", 3));
        assert!(matches!(&filter, FilterQuery::And(inner) if inner.len() == 3));
    }

    #[test]
    fn test_and_with_empty_is_identity() {
        let filter = FilterQuery::default().and(FilterQuery::eq("a", 1));
        assert_eq!(filter, FilterQuery::eq("a", 1));
        let filter = FilterQuery::eq("a", 1).and(FilterQuery::default());
        assert_eq!(filter, FilterQuery::eq("a", 1));
    }

    #[test]
    fn test_or_and_not() {
        let filter = !FilterQuery::eq("a", 1).or(FilterQuery::eq("b", 2));
        match filter {
            FilterQuery::Not(inner) => {
                assert!(matches!(&inner[0], FilterQuery::Or(or) if or.len() == 2));
            }
            other => panic!("Expected NOT, got {other:?}"),
        }
    }
}
