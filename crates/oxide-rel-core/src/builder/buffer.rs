//! SQL text buffer with argument collection.
//!
//! A [`Buffer`] accumulates SQL text and, depending on its
//! [`BufferConfig`], either collects values as bound arguments behind a
//! placeholder or renders them inline as escaped literals (used for DDL,
//! where statements cannot take arguments).

use serde::{Deserialize, Serialize};

use crate::value::{Value, TIMESTAMP_FORMAT};

/// Identifier and string literal quoting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quoter {
    /// Written before an identifier.
    pub id_prefix: String,
    /// Written after an identifier.
    pub id_suffix: String,
    /// Replacement for `id_suffix` occurring inside an identifier.
    pub id_suffix_escape: String,
    /// Quote around string literals.
    pub value_quote: String,
    /// Replacement for `value_quote` occurring inside a literal.
    pub value_quote_escape: String,
}

impl Quoter {
    /// Quotes an identifier.
    ///
    /// `*` is kept bare, dotted names are quoted per part (`a.*` keeps the
    /// star bare), and calls such as `COUNT(id)` or aliased expressions
    /// containing ` AS ` are written verbatim. Every other name is quoted,
    /// including names with spaces.
    #[must_use]
    pub fn id(&self, name: &str) -> String {
        if name == "*" || is_expression(name) {
            return name.to_string();
        }

        name.split('.')
            .map(|part| {
                if part == "*" {
                    part.to_string()
                } else {
                    format!(
                        "{}{}{}",
                        self.id_prefix,
                        part.replace(&self.id_suffix, &self.id_suffix_escape),
                        self.id_suffix
                    )
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quotes a string literal.
    #[must_use]
    pub fn value(&self, value: &str) -> String {
        format!(
            "{q}{}{q}",
            value.replace(&self.value_quote, &self.value_quote_escape),
            q = self.value_quote
        )
    }
}

fn is_expression(name: &str) -> bool {
    name.contains('(') || name.to_ascii_uppercase().contains(" AS ")
}

/// How a buffer renders values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferConfig {
    /// Argument placeholder token.
    pub placeholder: String,
    /// Inline spelling of `true`.
    pub bool_true: String,
    /// Inline spelling of `false`.
    pub bool_false: String,
    /// Render values as literals instead of collecting arguments.
    pub inline_values: bool,
    /// Quoting rules.
    pub quoter: Quoter,
}

impl BufferConfig {
    /// Starts an empty buffer using this configuration.
    #[must_use]
    pub const fn buffer(&self) -> Buffer<'_> {
        Buffer {
            config: self,
            sql: String::new(),
            args: Vec::new(),
        }
    }

    /// Renders a value as an escaped literal.
    #[must_use]
    pub fn inline(&self, value: &Value) -> String {
        match value {
            Value::Null => String::from("NULL"),
            Value::Bool(true) => self.bool_true.clone(),
            Value::Bool(false) => self.bool_false.clone(),
            Value::Int(n) => n.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => self.quoter.value(s),
            Value::Blob(b) => {
                let hex: String = b.iter().map(|byte| format!("{byte:02X}")).collect();
                format!("X'{hex}'")
            }
            Value::Timestamp(t) => self.quoter.value(&t.format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

/// SQL under construction.
#[derive(Debug)]
pub struct Buffer<'a> {
    config: &'a BufferConfig,
    sql: String,
    args: Vec<Value>,
}

impl Buffer<'_> {
    /// Appends raw SQL.
    pub fn push_str(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Appends a single character.
    pub fn push(&mut self, c: char) {
        self.sql.push(c);
    }

    /// Appends a quoted identifier.
    pub fn push_id(&mut self, name: &str) {
        let quoted = self.config.quoter.id(name);
        self.sql.push_str(&quoted);
    }

    /// Appends quoted identifiers separated by `, `.
    pub fn push_ids<S: AsRef<str>>(&mut self, names: &[S]) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_id(name.as_ref());
        }
    }

    /// Appends a value, inline or as a placeholder plus argument.
    pub fn push_value(&mut self, value: &Value) {
        if self.config.inline_values {
            let literal = self.config.inline(value);
            self.sql.push_str(&literal);
        } else {
            self.sql.push_str(&self.config.placeholder);
            self.args.push(value.clone());
        }
    }

    /// Appends values separated by `, `.
    pub fn push_values(&mut self, values: &[Value]) {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.sql.push_str(", ");
            }
            self.push_value(value);
        }
    }

    /// Appends a raw fragment whose placeholders bind `values` in order.
    ///
    /// With inline values each placeholder is replaced by the matching
    /// literal; placeholders without a value are left as written.
    pub fn push_fragment(&mut self, fragment: &str, values: &[Value]) {
        if !self.config.inline_values || self.config.placeholder.is_empty() {
            self.sql.push_str(fragment);
            self.args.extend_from_slice(values);
            return;
        }

        let placeholder = self.config.placeholder.as_str();
        let mut rest = fragment;
        let mut values = values.iter();
        while let Some(at) = rest.find(placeholder) {
            self.sql.push_str(&rest[..at]);
            match values.next() {
                Some(value) => {
                    let literal = self.config.inline(value);
                    self.sql.push_str(&literal);
                }
                None => self.sql.push_str(placeholder),
            }
            rest = &rest[at + placeholder.len()..];
        }
        self.sql.push_str(rest);
    }

    /// Returns whether nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Returns the SQL written so far.
    #[must_use]
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Consumes the buffer, returning SQL and collected arguments.
    #[must_use]
    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }

    /// Consumes the buffer, returning only the SQL.
    #[must_use]
    pub fn into_sql(self) -> String {
        self.sql
    }
}
