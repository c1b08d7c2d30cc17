//! Unified error type for the tracker CLI
//!
//! Every fallible path funnels into [`TrackerError`] so the dispatch loop can
//! decide whether to report and continue or shut the session down. A write that
//! affects zero rows is *not* an error — the data access layer returns the
//! affected-row count and the handlers report "not found" themselves.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrackerError>;

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Session could not be established (auth/network). Fatal.
    #[error("database connection failed: {0}")]
    Connection(#[source] sqlx::Error),

    /// A statement failed after the session was up. Reported, loop continues.
    #[error("query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// A delete/insert was rejected by a foreign-key constraint.
    #[error("rejected by a referential constraint: {0}")]
    Referential(String),

    /// User input rejected before it reached the database.
    #[error("invalid input: {0}")]
    Validation(String),

    /// Terminal I/O failure while prompting. Fatal.
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl TrackerError {
    /// Fatal errors terminate the dispatch loop; the rest are reported in red
    /// and the loop keeps running.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Prompt(_))
    }
}

impl From<sqlx::Error> for TrackerError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = e {
            // SQLSTATE 23503 = foreign_key_violation
            if db.code().as_deref() == Some("23503") {
                return Self::Referential(db.message().to_string());
            }
        }
        Self::Query(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referential_errors_are_not_fatal() {
        assert!(!TrackerError::Referential("roles -> departments".into()).is_fatal());
        assert!(!TrackerError::Validation("bad salary".into()).is_fatal());
    }

    #[test]
    fn connection_errors_are_fatal() {
        assert!(TrackerError::Connection(sqlx::Error::PoolClosed).is_fatal());
    }
}
