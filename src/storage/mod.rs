//! JSON 文件持久化
//!
//! The entire URL table lives in one JSON document, rewritten in full on
//! every save. Keys are short ids, values are [`StoredUrlEntry`] objects.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::PathBuf;

use tracing::{error, info};

use crate::errors::{Result, SnaplinkError};
use crate::registry::models::{StoredUrlEntry, UrlEntry};

pub struct JsonStore {
    file_path: PathBuf,
}

impl JsonStore {
    pub fn new<P: Into<PathBuf>>(file_path: P) -> Self {
        JsonStore {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &std::path::Path {
        &self.file_path
    }

    /// Load the whole table from disk.
    ///
    /// A missing file is initialized to an empty document in place. Any
    /// other read or parse failure is returned as an error and is fatal to
    /// process startup.
    pub fn load(&self) -> Result<Vec<(String, UrlEntry)>> {
        match fs::read_to_string(&self.file_path) {
            Ok(content) => {
                let stored: HashMap<String, StoredUrlEntry> = serde_json::from_str(&content)
                    .map_err(|e| {
                        error!(
                            "Failed to parse data file {}: {}",
                            self.file_path.display(),
                            e
                        );
                        SnaplinkError::serialization(format!("Failed to parse data file: {}", e))
                    })?;

                let entries: Vec<(String, UrlEntry)> = stored
                    .into_iter()
                    .map(|(id, entry)| (id, UrlEntry::from(entry)))
                    .collect();

                info!("Loaded {} short links", entries.len());
                Ok(entries)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(
                    "Data file not found, creating empty document: {}",
                    self.file_path.display()
                );
                if let Some(parent) = self.file_path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                fs::write(&self.file_path, "{}")?;
                Ok(Vec::new())
            }
            Err(e) => {
                error!(
                    "Failed to read data file {}: {}",
                    self.file_path.display(),
                    e
                );
                Err(SnaplinkError::file_operation(format!(
                    "Failed to read data file: {}",
                    e
                )))
            }
        }
    }

    /// Serialize every entry and overwrite the backing document in full.
    pub fn try_save(&self, snapshot: &[(String, UrlEntry)]) -> Result<()> {
        // BTreeMap 保证落盘键序稳定
        let doc: BTreeMap<&str, StoredUrlEntry> = snapshot
            .iter()
            .map(|(id, entry)| (id.as_str(), StoredUrlEntry::from(entry)))
            .collect();

        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.file_path, json)?;
        Ok(())
    }

    /// Save, swallowing failures.
    ///
    /// A failed save only leaves the in-memory table ahead of disk until
    /// the next successful save; callers never see the error.
    pub fn save(&self, snapshot: &[(String, UrlEntry)]) {
        if let Err(e) = self.try_save(snapshot) {
            error!(
                "Failed to save data file {}: {}",
                self.file_path.display(),
                e
            );
        }
    }
}
