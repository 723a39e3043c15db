//! Key-value persistence for viewer preferences.
//!
//! Web builds write to `window.localStorage`; native builds keep a small JSON
//! map in the platform data directory. Tests and fallbacks use
//! [`MemoryPreferences`].

use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the write for `{0}`")]
    Rejected(String),
    #[error("preference file could not be read or written: {0}")]
    Io(#[from] std::io::Error),
    #[error("preference file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Volatile store, lost when the process exits.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Browser `localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalPreferences;

#[cfg(target_arch = "wasm32")]
impl LocalPreferences {
    pub fn open() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::storage()?.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Rejected(key.to_string()))
    }
}

/// JSON map stored at `<data dir>/preferences.json`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct LocalPreferences {
    path: Option<std::path::PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
impl LocalPreferences {
    pub fn open() -> Self {
        let path = directories::ProjectDirs::from("com", "RetailInsights", "Report")
            .map(|dirs| dirs.data_dir().join("preferences.json"));
        Self { path }
    }

    pub fn at(path: impl Into<std::path::PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> Result<&std::path::Path, StorageError> {
        self.path.as_deref().ok_or(StorageError::Unavailable)
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl PreferenceStore for LocalPreferences {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());

        let path = self.path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&values)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips() {
        let mut store = MemoryPreferences::default();
        assert_eq!(store.get("darkMode").unwrap(), None);
        store.set("darkMode", "true").unwrap();
        assert_eq!(store.get("darkMode").unwrap().as_deref(), Some("true"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_keeps_other_keys() {
        let dir = std::env::temp_dir().join(format!("insights-prefs-{}", std::process::id()));
        let path = dir.join("preferences.json");
        let _ = std::fs::remove_file(&path);

        let mut store = LocalPreferences::at(&path);
        store.set("darkMode", "true").unwrap();
        store.set("locale", "es-ES").unwrap();
        store.set("darkMode", "false").unwrap();

        let reopened = LocalPreferences::at(&path);
        assert_eq!(reopened.get("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(reopened.get("locale").unwrap().as_deref(), Some("es-ES"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn malformed_file_is_reported() {
        let dir = std::env::temp_dir().join(format!("insights-bad-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let store = LocalPreferences::at(&path);
        assert!(matches!(store.get("darkMode"), Err(StorageError::Malformed(_))));

        let _ = std::fs::remove_dir_all(&dir);
    }
}
