//! Error taxonomy shared by every adapter.
//!
//! Adapters convert raw driver failures into [`Error::Driver`] and then let
//! their dialect reclassify the ones it recognises into
//! [`Error::Constraint`].

use std::fmt;

/// Boxed error used as the source of a [`DriverError`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The kind of database constraint that rejected a write.
///
/// This is the taxonomy shared by all dialects. A dialect only produces the
/// kinds it can recognise from its driver's errors: SQLite reports `Unique`
/// and `Check`, while `NotNull`, `PrimaryKey` and `ForeignKey` are reserved
/// for dialects whose drivers identify those violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintKind {
    /// UNIQUE constraint or unique index.
    Unique,
    /// CHECK constraint.
    Check,
    /// NOT NULL constraint.
    NotNull,
    /// PRIMARY KEY constraint.
    PrimaryKey,
    /// FOREIGN KEY constraint.
    ForeignKey,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => write!(f, "unique"),
            Self::Check => write!(f, "check"),
            Self::NotNull => write!(f, "not null"),
            Self::PrimaryKey => write!(f, "primary key"),
            Self::ForeignKey => write!(f, "foreign key"),
        }
    }
}

/// A failure reported by the database driver, kept verbatim.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DriverError {
    message: String,
    code: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl DriverError {
    /// Creates a driver error from the driver's message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
            source: None,
        }
    }

    /// Attaches the driver's error code.
    #[must_use]
    pub fn with_code(mut self, code: Option<String>) -> Self {
        self.code = code;
        self
    }

    /// Attaches the original driver error.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The raw message as reported by the driver.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The driver's error code, if it reported one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

/// A write rejected by a database-enforced constraint.
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct ConstraintError {
    /// Which kind of constraint was violated.
    pub kind: ConstraintKind,
    /// The violated key, as named by the database (e.g. `users.email`).
    pub key: String,
    /// The driver error this was classified from.
    #[source]
    pub source: DriverError,
}

/// Errors returned by adapters.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unclassified driver error.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Constraint violation.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

impl Error {
    /// Returns the constraint error if this is one.
    #[must_use]
    pub const fn as_constraint(&self) -> Option<&ConstraintError> {
        match self {
            Self::Constraint(err) => Some(err),
            Self::Driver(_) => None,
        }
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_driver_error_keeps_message_and_code() {
        let err = DriverError::new("no such table: foo").with_code(Some("1".to_string()));
        assert_eq!(err.message(), "no such table: foo");
        assert_eq!(err.code(), Some("1"));
        assert_eq!(err.to_string(), "no such table: foo");
    }

    #[test]
    fn test_constraint_error_displays_original_message() {
        let err = Error::from(ConstraintError {
            kind: ConstraintKind::Unique,
            key: "users.email".to_string(),
            source: DriverError::new("UNIQUE constraint failed: users.email"),
        });
        assert_eq!(err.to_string(), "UNIQUE constraint failed: users.email");

        let constraint = err.as_constraint().unwrap();
        assert_eq!(constraint.kind, ConstraintKind::Unique);
        assert!(constraint.source().is_some());
    }

    #[test]
    fn test_driver_error_is_not_a_constraint() {
        let err = Error::from(DriverError::new("disk I/O error"));
        assert!(err.as_constraint().is_none());
    }

    #[test]
    fn test_constraint_kind_display() {
        assert_eq!(ConstraintKind::Unique.to_string(), "unique");
        assert_eq!(ConstraintKind::Check.to_string(), "check");
        assert_eq!(ConstraintKind::NotNull.to_string(), "not null");
        assert_eq!(ConstraintKind::PrimaryKey.to_string(), "primary key");
        assert_eq!(ConstraintKind::ForeignKey.to_string(), "foreign key");
    }
}
