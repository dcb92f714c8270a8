//! UI preference persistence
//!
//! A tiny key-value store behind a trait so the theme toggle never touches
//! global state directly.

use crate::{ClientError, ClientResult};
use shared::ui::{DARK_MODE_KEY, Theme, UiState};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// String key-value store
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> ClientResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> ClientResult<()>;
}

/// Volatile store, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| ClientError::Preferences("store lock poisoned".into()))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| ClientError::Preferences("store lock poisoned".into()))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk, rewritten on every `set`
#[derive(Debug)]
pub struct JsonFilePreferenceStore {
    path: PathBuf,
}

impl JsonFilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ClientResult<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(ClientError::Preferences(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

impl PreferenceStore for JsonFilePreferenceStore {
    fn get(&self, key: &str) -> ClientResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ClientResult<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        let text = serde_json::to_string_pretty(&values)?;
        std::fs::write(&self.path, text).map_err(|e| {
            ClientError::Preferences(format!("failed to write {}: {}", self.path.display(), e))
        })
    }
}

/// Restore UI state from the store
pub fn load_ui_state(store: &dyn PreferenceStore) -> ClientResult<UiState> {
    let flag = store.get(DARK_MODE_KEY)?;
    Ok(UiState {
        theme: Theme::from_flag(flag.as_deref()),
    })
}

/// Flip the theme and persist it; returns the new state
pub fn toggle_theme(store: &dyn PreferenceStore, state: UiState) -> ClientResult<UiState> {
    let next = UiState {
        theme: state.theme.toggle(),
    };
    store.set(DARK_MODE_KEY, next.theme.as_flag())?;
    tracing::debug!(theme = ?next.theme, "Theme toggled");
    Ok(next)
}
