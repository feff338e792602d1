use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("failed to open database: {path}: {source}")]
    DbOpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("sql error: {0}")]
    SqlError(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<rusqlite::Error> for AppError {
    fn from(e: rusqlite::Error) -> Self {
        AppError::SqlError(e.to_string())
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::EmptyQuery => "EMPTY_QUERY",
            AppError::DbOpenFailed { .. } => "DB_OPEN_FAILED",
            AppError::SqlError(_) => "SQL_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::Internal(_) => "INTERNAL",
        }
    }

    /// Message placed in the `error` field of a response envelope.
    ///
    /// Store failures surface the engine's own text without our prefix.
    pub fn client_message(&self) -> String {
        match self {
            AppError::SqlError(msg) => msg.clone(),
            AppError::DbOpenFailed { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sql_errors_keep_raw_engine_text() {
        let e = AppError::SqlError("no such table: missing".into());
        assert_eq!(e.client_message(), "no such table: missing");
        assert_eq!(e.to_string(), "sql error: no such table: missing");
        assert_eq!(e.code(), "SQL_ERROR");
    }

    #[test]
    fn empty_query_message_is_fixed() {
        assert_eq!(AppError::EmptyQuery.client_message(), "Query cannot be empty");
    }
}
