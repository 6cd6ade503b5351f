//! Key (table constraint) descriptors.

use super::SchemaOp;

/// The kind of table-level key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// PRIMARY KEY.
    Primary,
    /// UNIQUE.
    Unique,
    /// FOREIGN KEY.
    Foreign,
}

/// Target of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyReference {
    /// Referenced table.
    pub table: String,
    /// Referenced columns.
    pub columns: Vec<String>,
    /// ON DELETE action, written verbatim.
    pub on_delete: Option<String>,
    /// ON UPDATE action, written verbatim.
    pub on_update: Option<String>,
}

/// A table-level key definition, or a change to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Operation on this key.
    pub op: SchemaOp,
    /// Constraint name.
    pub name: Option<String>,
    /// Kind of key.
    pub kind: KeyKind,
    /// Key columns.
    pub columns: Vec<String>,
    /// Foreign key target.
    pub reference: Option<ForeignKeyReference>,
    /// Raw SQL appended after the definition.
    pub options: String,
}

impl Key {
    fn new(kind: KeyKind, columns: &[&str]) -> Self {
        Self {
            op: SchemaOp::Create,
            name: None,
            kind,
            columns: columns.iter().map(ToString::to_string).collect(),
            reference: None,
            options: String::new(),
        }
    }

    /// Creates a PRIMARY KEY over the given columns.
    #[must_use]
    pub fn primary(columns: &[&str]) -> Self {
        Self::new(KeyKind::Primary, columns)
    }

    /// Creates a UNIQUE key over the given columns.
    #[must_use]
    pub fn unique(columns: &[&str]) -> Self {
        Self::new(KeyKind::Unique, columns)
    }

    /// Creates a FOREIGN KEY referencing `table`.
    #[must_use]
    pub fn foreign(columns: &[&str], table: &str, references: &[&str]) -> Self {
        let mut key = Self::new(KeyKind::Foreign, columns);
        key.reference = Some(ForeignKeyReference {
            table: table.to_string(),
            columns: references.iter().map(ToString::to_string).collect(),
            on_delete: None,
            on_update: None,
        });
        key
    }

    /// Describes dropping the named key.
    #[must_use]
    pub fn drop(kind: KeyKind, name: &str) -> Self {
        let mut key = Self::new(kind, &[]);
        key.op = SchemaOp::Drop;
        key.name = Some(name.to_string());
        key
    }

    /// Names the constraint.
    #[must_use]
    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Sets the ON DELETE action of a foreign key.
    #[must_use]
    pub fn on_delete(mut self, action: &str) -> Self {
        if let Some(reference) = self.reference.as_mut() {
            reference.on_delete = Some(action.to_string());
        }
        self
    }

    /// Sets the ON UPDATE action of a foreign key.
    #[must_use]
    pub fn on_update(mut self, action: &str) -> Self {
        if let Some(reference) = self.reference.as_mut() {
            reference.on_update = Some(action.to_string());
        }
        self
    }
}
