//! Inventory records persisted to an indented JSON file.

pub mod entity;
pub mod error;

pub use error::*;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use crate::domain::InventoryRecord;
use crate::store_framework::KeyedEntityStore;

/// An inventory bound to the JSON file it is loaded from and saved to.
#[derive(Debug)]
pub struct InventoryLog {
    path: PathBuf,
    records: KeyedEntityStore<InventoryRecord>,
}

impl InventoryLog {
    /// Empty log that will be saved to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: KeyedEntityStore::new(),
        }
    }

    /// Reads the log at `path`. A missing file yields an empty log.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref();
        let mut log = Self::new(path);

        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No inventory log yet, starting empty");
                return Ok(log);
            }
            Err(source) => {
                return Err(LogError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let records: Vec<InventoryRecord> =
            serde_json::from_str(&content).map_err(|source| LogError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        for record in records {
            log.records.insert(record)?;
        }
        info!(records = log.records.len(), "Inventory log loaded");
        Ok(log)
    }

    /// Writes every record, ordered by id, as indented JSON.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn save(&self) -> Result<(), LogError> {
        let json = serde_json::to_string_pretty(&self.records()).map_err(|source| LogError::Json {
            path: self.path.clone(),
            source,
        })?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| LogError::Io {
                path: self.path.clone(),
                source,
            })?;
        info!(records = self.records.len(), "Inventory log saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn add(&mut self, record: InventoryRecord) -> Result<(), LogError> {
        debug!(id = record.id, name = %record.name, "Logging inventory record");
        self.records.insert(record)?;
        Ok(())
    }

    pub fn get(&self, id: u32) -> Result<&InventoryRecord, LogError> {
        Ok(self.records.get_by_id(&id)?)
    }

    pub fn set_quantity(&mut self, id: u32, quantity: i32) -> Result<(), LogError> {
        self.records.update_quantity(&id, quantity)?;
        debug!(id, quantity, "Inventory quantity updated");
        Ok(())
    }

    pub fn remove(&mut self, id: u32) -> Result<InventoryRecord, LogError> {
        Ok(self.records.remove(&id)?)
    }

    /// Records ordered by id.
    pub fn records(&self) -> Vec<InventoryRecord> {
        let mut records = self.records.list_all();
        records.sort_by_key(|record| record.id);
        records
    }
}
