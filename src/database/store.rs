//! File-backed record store
//!
//! Loads and persists the single JSON document holding users, tasks and
//! payout requests. Every save rewrites the whole document.

use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use crate::models::StoreDocument;
use crate::utils::errors::Result;
use crate::utils::logging::log_storage_operation;

const TEMP_FILE_SUFFIX: &str = ".tmp";

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Make sure the document exists on disk with at least the default shape
    pub async fn init(&self) -> Result<StoreDocument> {
        let document = self.load().await?;
        self.save(&document).await?;
        info!(path = %self.path.display(), users = document.users.len(), "Record store initialized");
        Ok(document)
    }

    /// Read the document, defaulting to empty collections when the file is
    /// missing or blank
    pub async fn load(&self) -> Result<StoreDocument> {
        let started = Instant::now();
        let result = self.read_document().await;
        log_storage_operation(
            "load",
            &self.path.display().to_string(),
            started.elapsed().as_millis() as u64,
            result.is_ok(),
        );
        result
    }

    /// Overwrite the persisted document with `document`
    pub async fn save(&self, document: &StoreDocument) -> Result<()> {
        let started = Instant::now();
        let result = self.write_document(document).await;
        log_storage_operation(
            "save",
            &self.path.display().to_string(),
            started.elapsed().as_millis() as u64,
            result.is_ok(),
        );
        result
    }

    async fn read_document(&self) -> Result<StoreDocument> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No record store file yet, using empty document");
                return Ok(StoreDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(StoreDocument::default());
        }

        Ok(serde_json::from_str(&raw)?)
    }

    async fn write_document(&self, document: &StoreDocument) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let serialized = serde_json::to_vec_pretty(document)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, serialized).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
                warn!(path = %temp_path.display(), error = %cleanup, "Failed to remove temporary store file");
            }
            return Err(e.into());
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(TEMP_FILE_SUFFIX);
        self.path.with_file_name(name)
    }
}
