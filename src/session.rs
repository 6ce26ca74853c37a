// ABOUTME: Session persistence - target, selection, and custom foods saved across runs
// ABOUTME: Versioned JSON in the platform data dir; corrupt or missing state falls back to defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Seedmix contributors

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::constants::{DEFAULT_MAX_PARTS, DEFAULT_TARGET};
use crate::errors::StorageError;
use crate::models::{Ingredient, NutrientProfile};

/// Versioned state file name. Bump the suffix on incompatible changes so
/// stale files fall back to defaults instead of half-parsing.
const STATE_FILE: &str = "state-v1.json";

/// Everything a user session keeps between runs.
///
/// The blend core knows nothing about this type; it exists for the
/// presentation surface. Enabled names are stored lowercased so lookups and
/// the saved form agree regardless of how the user typed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionState {
    /// Desired nutrient percentages for the final mix
    pub target: NutrientProfile,
    /// Upper bound on any single ingredient's part count
    pub max_parts: u32,
    /// Lowercased names of enabled ingredients
    pub enabled: BTreeSet<String>,
    /// User-defined ingredients, revalidated on restore
    pub custom_foods: Vec<Ingredient>,
    /// When this state was last saved
    pub saved_at: DateTime<Utc>,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            max_parts: DEFAULT_MAX_PARTS,
            enabled: BTreeSet::new(),
            custom_foods: Vec::new(),
            saved_at: Utc::now(),
        }
    }
}

impl SessionState {
    /// Mark an ingredient as enabled.
    pub fn enable(&mut self, name: &str) {
        self.enabled.insert(name.to_lowercase());
    }

    /// Mark an ingredient as disabled.
    pub fn disable(&mut self, name: &str) {
        self.enabled.remove(&name.to_lowercase());
    }

    /// Whether an ingredient is currently enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(&name.to_lowercase())
    }

    /// The enabled ingredients in catalog order - the ordered list handed
    /// to the blend core. Names enabled in a previous session but no
    /// longer in the catalog are skipped.
    #[must_use]
    pub fn enabled_ingredients(&self, catalog: &Catalog) -> Vec<Ingredient> {
        catalog
            .iter()
            .filter(|i| self.is_enabled(&i.name))
            .cloned()
            .collect()
    }
}

/// File-backed store for [`SessionState`].
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    /// Store rooted at an explicit directory.
    #[must_use]
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Store under the platform data directory (`<data_dir>/seedmix`).
    ///
    /// # Errors
    ///
    /// [`StorageError::DataDirUnavailable`] when the platform exposes no
    /// data directory.
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::DataDirUnavailable)?;
        Ok(Self::new(base.join("seedmix")))
    }

    fn state_path(&self) -> PathBuf {
        self.dir.join(STATE_FILE)
    }

    /// Load the saved session, or defaults when none exists.
    ///
    /// A corrupt or unreadable state file is logged and replaced by
    /// defaults rather than surfaced as an error - losing a saved
    /// selection is recoverable, refusing to start is not.
    #[must_use]
    pub fn load(&self) -> SessionState {
        let path = self.state_path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no saved session, using defaults");
                return SessionState::default();
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "could not read saved session, using defaults");
                return SessionState::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "saved session is corrupt, using defaults");
                SessionState::default()
            }
        }
    }

    /// Persist the session, stamping `saved_at`.
    ///
    /// Writes to a temporary file in the same directory and renames it over
    /// the old state, so a crash mid-write leaves the previous state
    /// intact.
    ///
    /// # Errors
    ///
    /// [`StorageError::Io`] or [`StorageError::Serialize`].
    pub fn save(&self, state: &SessionState) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let mut stamped = state.clone();
        stamped.saved_at = Utc::now();
        let json = serde_json::to_string_pretty(&stamped)
            .map_err(|source| StorageError::Serialize { source })?;

        let tmp_path = self.dir.join(format!("{STATE_FILE}.tmp"));
        write_and_rename(&tmp_path, &self.state_path(), &json)
    }

    /// Delete any saved session. Missing state is not an error.
    ///
    /// # Errors
    ///
    /// [`StorageError::Io`] for failures other than the file not existing.
    pub fn reset(&self) -> Result<(), StorageError> {
        let path = self.state_path();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io { path, source }),
        }
    }
}

fn write_and_rename(tmp_path: &Path, final_path: &Path, contents: &str) -> Result<(), StorageError> {
    fs::write(tmp_path, contents).map_err(|source| StorageError::Io {
        path: tmp_path.to_path_buf(),
        source,
    })?;
    fs::rename(tmp_path, final_path).map_err(|source| StorageError::Io {
        path: final_path.to_path_buf(),
        source,
    })
}
