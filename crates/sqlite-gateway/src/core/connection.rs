use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use rusqlite::{Connection, OpenFlags};

use crate::error::{AppError, AppResult};

/// Where the database lives and how connections to it are opened.
///
/// Every call opens its own connection from this value; nothing is held
/// between calls.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(db_path: &Path, busy_timeout: Duration) -> AppResult<Self> {
        Ok(Self {
            db_path: absolute_lossy(db_path)?,
            busy_timeout,
        })
    }

    pub fn open(&self) -> AppResult<Connection> {
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_CREATE
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(&self.db_path, flags).map_err(|source| {
            AppError::DbOpenFailed {
                path: self.db_path.clone(),
                source,
            }
        })?;
        if let Err(e) = conn.busy_timeout(self.busy_timeout) {
            tracing::warn!(error=%e, path=%self.db_path.display(), "failed to set busy timeout");
        }
        Ok(conn)
    }

    /// Creates the directory holding the database file if it is missing.
    pub fn ensure_parent_dir(&self) -> AppResult<()> {
        if let Some(dir) = self.db_path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

fn absolute_lossy(path: &Path) -> AppResult<PathBuf> {
    // canonicalize requires the file to exist; SQLite creates it on open.
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::temp_store;
    use super::*;

    #[test]
    fn relative_paths_are_made_absolute() {
        let store = StoreConfig::new(Path::new("database/x.db"), Duration::ZERO).unwrap();
        assert!(store.db_path.is_absolute());
        assert!(store.db_path.ends_with("database/x.db"));
    }

    #[test]
    fn open_creates_missing_file() {
        let (_dir, store) = temp_store();
        assert!(!store.db_path.exists());
        drop(store.open().unwrap());
        assert!(store.db_path.exists());
    }

    #[test]
    fn open_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let store = StoreConfig::new(&dir.path().join("nope/deeper/x.db"), Duration::ZERO).unwrap();
        let err = store.open().unwrap_err();
        assert_eq!(err.code(), "DB_OPEN_FAILED");
        assert!(!err.client_message().is_empty());
    }

    #[test]
    fn ensure_parent_dir_makes_nested_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = StoreConfig::new(&dir.path().join("a/b/x.db"), Duration::ZERO).unwrap();
        store.ensure_parent_dir().unwrap();
        store.open().unwrap();
        assert!(store.db_path.exists());
    }
}
