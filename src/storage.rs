//! Append-only JSON store of extracted contact records

use crate::error::Result;
use crate::processing::contact::ContactInfo;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// A JSON array of [`ContactInfo`] records kept in a single file.
///
/// A missing or unreadable store reads as empty, so the first append
/// creates it.
pub struct ContactStore {
    path: PathBuf,
}

impl ContactStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<ContactInfo> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Store {} not readable ({}), starting empty", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    "Store {} is not a valid record list ({}), starting empty",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Append `contact` and rewrite the whole store. Returns the new record count.
    pub fn append(&self, contact: &ContactInfo) -> Result<usize> {
        let mut records = self.load();
        records.push(contact.clone());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, content)?;

        debug!("Stored record #{} in {}", records.len(), self.path.display());
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn contact(name: &str) -> ContactInfo {
        ContactInfo {
            full_name: Some(name.to_string()),
            email: Some(format!("{}@example.com", name.to_lowercase())),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_store_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::new(dir.path().join("individuals.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::new(dir.path().join("individuals.json"));

        assert_eq!(store.append(&contact("Ada")).unwrap(), 1);
        assert_eq!(store.append(&contact("Grace")).unwrap(), 2);

        let records = store.load();
        assert_eq!(records, vec![contact("Ada"), contact("Grace")]);
    }

    #[test]
    fn test_corrupt_store_is_replaced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("individuals.json");
        fs::write(&path, "{ not json").unwrap();

        let store = ContactStore::new(&path);
        assert!(store.load().is_empty());
        assert_eq!(store.append(&contact("Ada")).unwrap(), 1);
        assert_eq!(store.load().len(), 1);
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("data").join("individuals.json");
        let store = ContactStore::new(&path);

        store.append(&ContactInfo::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_absent_fields_persist_as_null() {
        let dir = TempDir::new().unwrap();
        let store = ContactStore::new(dir.path().join("individuals.json"));
        store.append(&contact("Ada")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"address\": null"));
    }
}
