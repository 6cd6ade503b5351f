//! SQLite error conversion and classification.

use oxide_rel_core::{ConstraintError, ConstraintKind, DriverError, Error};

const SEPARATOR: &str = " failed: ";

/// Converts a `sqlx` error into a driver error.
///
/// Database errors keep SQLite's own message and extended result code; the
/// `sqlx` error is kept as the source.
#[must_use]
pub fn from_sqlx(err: sqlx::Error) -> Error {
    let (message, code) = match err.as_database_error() {
        Some(db) => (
            db.message().to_string(),
            db.code().map(std::borrow::Cow::into_owned),
        ),
        None => (err.to_string(), None),
    };
    Error::Driver(DriverError::new(message).with_code(code).with_source(err))
}

/// Classifies SQLite constraint failures.
///
/// Messages of the form `UNIQUE constraint failed: <key>` and
/// `CHECK constraint failed: <key>` become [`Error::Constraint`] carrying
/// the key and the original error. Everything else is returned unchanged.
#[must_use]
pub fn classify(err: Error) -> Error {
    let driver = match err {
        Error::Driver(driver) => driver,
        other => return other,
    };

    let classified = driver
        .message()
        .split_once(SEPARATOR)
        .and_then(|(head, key)| {
            let kind = match head {
                "UNIQUE constraint" => ConstraintKind::Unique,
                "CHECK constraint" => ConstraintKind::Check,
                _ => return None,
            };
            Some((kind, key.to_string()))
        });

    match classified {
        Some((kind, key)) => Error::Constraint(ConstraintError {
            kind,
            key,
            source: driver,
        }),
        None => Error::Driver(driver),
    }
}
