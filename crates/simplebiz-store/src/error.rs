// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreErrorCode {
    NotFound,
    Conflict,
    Validation,
    Io,
    Internal,
}

impl StoreErrorCode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Validation => "validation_error",
            Self::Io => "io_error",
            Self::Internal => "internal_error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreError {
    pub code: StoreErrorCode,
    pub message: String,
}

impl StoreError {
    #[must_use]
    pub fn new(code: StoreErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(what: &str, key: &str) -> Self {
        Self::new(StoreErrorCode::NotFound, format!("{what} not found: {key}"))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for StoreError {}

/// The application-level uniqueness/parent checks produce friendly errors
/// up front; the SQLite constraints are the hard backstop under concurrent
/// duplicate submissions. Constraint violations surfacing from rusqlite are
/// therefore folded back into the same tagged codes.
impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(cause, ref message) = err {
            if cause.code == rusqlite::ErrorCode::ConstraintViolation {
                let detail = message.clone().unwrap_or_else(|| cause.to_string());
                return if cause.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_FOREIGNKEY {
                    Self::new(
                        StoreErrorCode::Validation,
                        format!("referenced parent does not exist: {detail}"),
                    )
                } else {
                    Self::new(
                        StoreErrorCode::Conflict,
                        format!("uniqueness constraint violated: {detail}"),
                    )
                };
            }
            if cause.code == rusqlite::ErrorCode::CannotOpen
                || cause.code == rusqlite::ErrorCode::DiskFull
                || cause.code == rusqlite::ErrorCode::DatabaseBusy
            {
                return Self::new(StoreErrorCode::Io, err.to_string());
            }
        }
        Self::new(StoreErrorCode::Internal, err.to_string())
    }
}
