//! SQLite column types and column options.

use oxide_rel_core::builder::{self, ColumnSqlType};
use oxide_rel_core::schema::{Column, ColumnType};

/// Keyword appended to identity primary keys.
pub const AUTOINCREMENT: &str = "AUTOINCREMENT";

/// Maps a column to its SQLite type.
///
/// Identity columns become `INTEGER` without width so a primary key aliases
/// the rowid. Other types fall back to the generic mapping. Unsigned columns
/// are prefixed with `UNSIGNED `, which SQLite accepts but does not enforce.
#[must_use]
pub fn map_column(column: &Column) -> ColumnSqlType {
    let mut mapped = match column.kind {
        ColumnType::Id | ColumnType::BigId => ColumnSqlType::new("INTEGER"),
        ColumnType::Int => ColumnSqlType::new("INTEGER").with_limit(column.limit),
        _ => builder::map_column(column),
    };

    if column.unsigned {
        mapped.name = format!("UNSIGNED {}", mapped.name);
    }
    mapped
}

/// Renders the inline constraints of a column, space separated.
#[must_use]
pub fn column_options(column: &Column) -> String {
    let mut options = Vec::new();
    if column.primary {
        options.push("PRIMARY KEY");
        if column.kind.is_identity() {
            options.push(AUTOINCREMENT);
        }
    }
    if column.required {
        options.push("NOT NULL");
    }
    if column.unique {
        options.push("UNIQUE");
    }
    options.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_integer_without_width() {
        for kind in [ColumnType::Id, ColumnType::BigId] {
            let column = Column::new("id", kind).limit(20).precision(5, 2);
            let mapped = map_column(&column);
            assert_eq!(mapped.name, "INTEGER");
            assert_eq!(mapped.limit, None);
            assert_eq!(mapped.scale, None);
        }
    }

    #[test]
    fn test_int_keeps_display_width() {
        let mapped = map_column(&Column::new("age", ColumnType::Int).limit(11));
        assert_eq!(mapped.name, "INTEGER");
        assert_eq!(mapped.limit, Some(11));
        assert_eq!(mapped.scale, None);
        assert_eq!(mapped.to_string(), "INTEGER(11)");
    }

    #[test]
    fn test_other_types_use_generic_mapping() {
        assert_eq!(map_column(&Column::new("ok", ColumnType::Bool)).to_string(), "BOOL");
        assert_eq!(
            map_column(&Column::new("name", ColumnType::String).limit(50)).to_string(),
            "VARCHAR(50)"
        );
        assert_eq!(
            map_column(&Column::new("n", ColumnType::BigInt)).to_string(),
            "BIGINT"
        );
        assert_eq!(
            map_column(&Column::new("at", ColumnType::DateTime)).to_string(),
            "DATETIME"
        );
    }

    #[test]
    fn test_unsigned_prefix() {
        let mapped = map_column(&Column::new("count", ColumnType::Int).unsigned());
        assert!(mapped.name.starts_with("UNSIGNED "));
        assert_eq!(mapped.to_string(), "UNSIGNED INTEGER");

        let mapped = map_column(&Column::new("size", ColumnType::SmallInt).unsigned().limit(4));
        assert_eq!(mapped.to_string(), "UNSIGNED SMALLINT(4)");
    }

    #[test]
    fn test_primary_identity_autoincrements() {
        let column = Column::new("id", ColumnType::Id).primary();
        assert_eq!(column_options(&column), "PRIMARY KEY AUTOINCREMENT");

        let column = Column::new("id", ColumnType::BigId).primary();
        assert_eq!(column_options(&column), "PRIMARY KEY AUTOINCREMENT");
    }

    #[test]
    fn test_primary_non_identity() {
        let column = Column::new("code", ColumnType::String).primary();
        assert_eq!(column_options(&column), "PRIMARY KEY");
    }

    #[test]
    fn test_option_order() {
        let column = Column::new("email", ColumnType::String)
            .primary()
            .required()
            .unique();
        assert_eq!(column_options(&column), "PRIMARY KEY NOT NULL UNIQUE");
    }

    #[test]
    fn test_options_never_start_with_space() {
        let columns = [
            Column::new("a", ColumnType::Int),
            Column::new("b", ColumnType::Int).required(),
            Column::new("c", ColumnType::Int).unique(),
            Column::new("d", ColumnType::Id).primary().unique(),
        ];
        for column in &columns {
            let options = column_options(column);
            assert!(!options.starts_with(' '), "{options:?}");
            assert!(!options.ends_with(' '), "{options:?}");
        }
        assert_eq!(column_options(&columns[0]), "");
    }

    #[test]
    fn test_mapping_is_pure() {
        let column = Column::new("age", ColumnType::Int).limit(3).unsigned();
        assert_eq!(map_column(&column), map_column(&column));
        assert_eq!(column_options(&column), column_options(&column));
    }
}
