use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A row of the user table. Its fields belong to whoever owns the table and
/// are passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Value);

#[derive(Debug, Error)]
pub enum DataStoreError {
    #[error("user store {} is unavailable: {source}", .path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("user store {} is malformed: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<User>, DataStoreError>;
}

/// Reads the whole table from a JSON array on every call.
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileUserStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn fetch_all(&self) -> Result<Vec<User>, DataStoreError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DataStoreError::Unavailable {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| DataStoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}
