//! JSON-file account source.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::accounts::{Account, AccountSource};
use folio_shared::{AppError, AppResult};

/// Reads the account list from a JSON array on disk, as saved from the
/// `/accounts` endpoint.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AccountSource for JsonFileSource {
    async fn accounts(&self) -> AppResult<Vec<Account>> {
        let raw = read(&self.path).await?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::Validation(format!("{}: {e}", self.path.display()))
        })
    }
}

/// Loads a `key -> label` map from a JSON object on disk.
pub async fn load_label_map(path: &Path) -> AppResult<HashMap<String, String>> {
    let raw = read(path).await?;
    serde_json::from_str(&raw)
        .map_err(|e| AppError::Validation(format!("{}: {e}", path.display())))
}

async fn read(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::NotFound(path.display().to_string()),
        _ => AppError::Internal(format!("{}: {e}", path.display())),
    })
}
