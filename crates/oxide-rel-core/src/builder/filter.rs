//! WHERE condition rendering.

use super::buffer::Buffer;
use crate::query::FilterQuery;
use crate::value::Value;

/// Renders [`FilterQuery`] trees.
///
/// Top-level groups are written bare; nested groups with more than one
/// condition are parenthesised. Fragments inside a group are always
/// parenthesised so their own operators cannot rebind the group's.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterBuilder;

impl FilterBuilder {
    /// Writes `filter` into `buffer`.
    pub fn write(self, buffer: &mut Buffer<'_>, filter: &FilterQuery) {
        self.write_filter(buffer, filter, false);
    }

    fn write_filter(self, buffer: &mut Buffer<'_>, filter: &FilterQuery, nested: bool) {
        match filter {
            FilterQuery::And(inner) if inner.is_empty() => buffer.push_str("1=1"),
            FilterQuery::Or(inner) if inner.is_empty() => buffer.push_str("1=0"),
            FilterQuery::Not(inner) if inner.is_empty() => buffer.push_str("1=1"),
            FilterQuery::And(inner) => self.write_group(buffer, " AND ", inner, nested),
            FilterQuery::Or(inner) => self.write_group(buffer, " OR ", inner, nested),
            FilterQuery::Not(inner) => {
                buffer.push_str("NOT (");
                match inner.as_slice() {
                    [single] => self.write_filter(buffer, single, false),
                    _ => self.write_group(buffer, " AND ", inner, false),
                }
                buffer.push(')');
            }
            FilterQuery::Eq(field, value) => Self::write_comparison(buffer, field, "=", value),
            FilterQuery::Ne(field, value) => Self::write_comparison(buffer, field, "<>", value),
            FilterQuery::Lt(field, value) => Self::write_comparison(buffer, field, "<", value),
            FilterQuery::Lte(field, value) => Self::write_comparison(buffer, field, "<=", value),
            FilterQuery::Gt(field, value) => Self::write_comparison(buffer, field, ">", value),
            FilterQuery::Gte(field, value) => Self::write_comparison(buffer, field, ">=", value),
            FilterQuery::Nil(field) => {
                buffer.push_id(field);
                buffer.push_str(" IS NULL");
            }
            FilterQuery::NotNil(field) => {
                buffer.push_id(field);
                buffer.push_str(" IS NOT NULL");
            }
            // An empty IN matches nothing, an empty NOT IN matches everything.
            FilterQuery::In(_, values) if values.is_empty() => buffer.push_str("1=0"),
            FilterQuery::Nin(_, values) if values.is_empty() => buffer.push_str("1=1"),
            FilterQuery::In(field, values) => Self::write_in(buffer, field, "IN", values),
            FilterQuery::Nin(field, values) => Self::write_in(buffer, field, "NOT IN", values),
            FilterQuery::Like(field, pattern) => {
                Self::write_comparison(buffer, field, "LIKE", &Value::Text(pattern.clone()));
            }
            FilterQuery::NotLike(field, pattern) => {
                Self::write_comparison(buffer, field, "NOT LIKE", &Value::Text(pattern.clone()));
            }
            FilterQuery::Fragment(sql, values) if nested => {
                buffer.push('(');
                buffer.push_fragment(sql, values);
                buffer.push(')');
            }
            FilterQuery::Fragment(sql, values) => buffer.push_fragment(sql, values),
        }
    }

    fn write_group(self, buffer: &mut Buffer<'_>, op: &str, inner: &[FilterQuery], nested: bool) {
        let wrap = nested && inner.len() > 1;
        if wrap {
            buffer.push('(');
        }
        for (i, filter) in inner.iter().enumerate() {
            if i > 0 {
                buffer.push_str(op);
            }
            self.write_filter(buffer, filter, true);
        }
        if wrap {
            buffer.push(')');
        }
    }

    fn write_comparison(buffer: &mut Buffer<'_>, field: &str, op: &str, value: &Value) {
        buffer.push_id(field);
        buffer.push(' ');
        buffer.push_str(op);
        buffer.push(' ');
        buffer.push_value(value);
    }

    fn write_in(buffer: &mut Buffer<'_>, field: &str, op: &str, values: &[Value]) {
        buffer.push_id(field);
        buffer.push(' ');
        buffer.push_str(op);
        buffer.push_str(" (");
        buffer.push_values(values);
        buffer.push(')');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::{Dialect, GenericDialect};

    fn render(filter: &FilterQuery) -> (String, Vec<Value>) {
        let dialect = GenericDialect::new();
        let mut buffer = dialect.config().buffer.buffer();
        FilterBuilder.write(&mut buffer, filter);
        buffer.into_parts()
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(render(&FilterQuery::eq("id", 1)).0, "\"id\" = ?");
        assert_eq!(render(&FilterQuery::ne("id", 1)).0, "\"id\" <> ?");
        assert_eq!(render(&FilterQuery::lte("age", 10)).0, "\"age\" <= ?");
        assert_eq!(render(&FilterQuery::gt("age", 10)).0, "\"age\" > ?");
    }

    #[test]
    fn test_null_checks() {
        assert_eq!(
            render(&FilterQuery::is_null("deleted_at")).0,
            "\"deleted_at\" IS NULL"
        );
        assert_eq!(
            render(&FilterQuery::is_not_null("deleted_at")).0,
            "\"deleted_at\" IS NOT NULL"
        );
    }

    #[test]
    fn test_in_list() {
        let (sql, args) = render(&FilterQuery::in_list("id", vec![1, 2, 3]));
        assert_eq!(sql, "\"id\" IN (?, ?, ?)");
        assert_eq!(args.len(), 3);

        let (sql, _) = render(&FilterQuery::not_in_list("id", vec![1]));
        assert_eq!(sql, "\"id\" NOT IN (?)");
    }

    #[test]
    fn test_empty_in_list() {
        assert_eq!(render(&FilterQuery::in_list::<i64>("id", vec![])).0, "1=0");
        assert_eq!(render(&FilterQuery::not_in_list::<i64>("id", vec![])).0, "1=1");
    }

    #[test]
    fn test_like() {
        let (sql, args) = render(&FilterQuery::like("name", "A%"));
        assert_eq!(sql, "\"name\" LIKE ?");
        assert_eq!(args, vec![Value::Text("A%".to_string())]);
    }

    #[test]
    fn test_nested_groups() {
        let filter = FilterQuery::eq("status", "active")
            .and(FilterQuery::gt("age", 18).or(FilterQuery::eq("verified", true)));
        let (sql, args) = render(&filter);
        assert_eq!(
            sql,
            "\"status\" = ? AND (\"age\" > ? OR \"verified\" = ?)"
        );
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_not() {
        let filter = !FilterQuery::eq("a", 1).and(FilterQuery::eq("b", 2));
        assert_eq!(render(&filter).0, "NOT (\"a\" = ? AND \"b\" = ?)");
    }

    #[test]
    fn test_fragment_in_group_is_parenthesised() {
        let filter = FilterQuery::eq("email", "a@x").and(FilterQuery::fragment(
            "age = ? OR age = ?",
            vec![Value::Int(2), Value::Int(3)],
        ));
        let (sql, args) = render(&filter);
        assert_eq!(sql, "\"email\" = ? AND (age = ? OR age = ?)");
        assert_eq!(args.len(), 3);

        let filter = FilterQuery::fragment("a = 1 AND b = 2", vec![])
            .or(FilterQuery::fragment("c = 3", vec![]));
        assert_eq!(render(&filter).0, "(a = 1 AND b = 2) OR (c = 3)");
    }

    #[test]
    fn test_fragment() {
        let filter = FilterQuery::fragment("age BETWEEN ? AND ?", vec![Value::Int(1), Value::Int(5)]);
        let (sql, args) = render(&filter);
        assert_eq!(sql, "age BETWEEN ? AND ?");
        assert_eq!(args, vec![Value::Int(1), Value::Int(5)]);
    }
}
