use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, error};

use crate::error::{HubError, Result};

pub const DEFAULT_DB_PATH: &str = "agent.db";

/// SQLite location for an agent. Only the path is held; no connection is
/// opened and no schema exists yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    db_path: String,
}

impl Database {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Handle for `file_name` inside `directory`.
    pub fn in_directory(directory: &Path, file_name: &str) -> Self {
        Self::new(directory.join(file_name).to_string_lossy().into_owned())
    }

    pub fn db_path(&self) -> &str {
        &self.db_path
    }

    /// Echoes the search term to stdout. Runs no query.
    pub fn test_method(&self, search_term: &str) {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        if let Err(e) = self.test_method_to(&mut handle, search_term) {
            error!("Failed to echo search term: {}", e);
        }
    }

    pub fn test_method_to<W: Write>(&self, out: &mut W, search_term: &str) -> Result<()> {
        debug!(db_path = %self.db_path, "test_method called");
        writeln!(out, "search_term: {}", search_term)
            .map_err(|e| HubError::OutputError(format!("Failed to write search term: {}", e)))?;
        Ok(())
    }
}

impl Default for Database {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}
