use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::Roster;

#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedState(BTreeMap<String, Roster>);

impl PersistedState {
    pub fn get(&self, team: &str) -> Option<&Roster> {
        self.0.get(team)
    }

    pub fn insert(&mut self, team: impl Into<String>, roster: Roster) {
        self.0.insert(team.into(), roster);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Roster)> for PersistedState {
    fn from_iter<I: IntoIterator<Item = (String, Roster)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> PersistedState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No state at {}, starting fresh", self.path.display());
                return PersistedState::default();
            }
            Err(e) => {
                log::warn!("Failed to read {}: {}", self.path.display(), e);
                return PersistedState::default();
            }
        };

        serde_json::from_str(&text).unwrap_or_else(|e| {
            log::warn!("Ignoring corrupt state in {}: {}", self.path.display(), e);
            PersistedState::default()
        })
    }

    /// Writes a sibling temp file and renames it over the target.
    pub fn save(&self, state: &PersistedState) -> Result<(), StateError> {
        let json = serde_json::to_string_pretty(state)?;
        let io_err = |source: std::io::Error| StateError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let tmp = self.tmp_path();
        let mut file = File::create(&tmp).map_err(io_err)?;
        file.write_all(json.as_bytes()).map_err(io_err)?;
        file.write_all(b"\n").map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        drop(file);

        fs::rename(&tmp, &self.path).map_err(io_err)?;
        log::debug!("Saved {} team(s) to {}", state.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn roster(players: &[&str]) -> Roster {
        players.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_load_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{\"Boston Bruins\": [\"A\",").unwrap();

        assert!(StateStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "[\"Boston Bruins\"]").unwrap();

        assert!(StateStore::new(&path).load().is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("nested/state.json"));
        let state: PersistedState = [
            ("Boston Bruins".to_string(), roster(&["A", "B", "C", "D", "E"])),
            ("Dallas Stars".to_string(), Vec::new()),
        ]
        .into_iter()
        .collect();

        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
        assert!(!store.tmp_path().exists(), "Temp file should be renamed away");
    }

    #[test]
    fn test_resave_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(
            &path,
            "{\n  \"Seattle Kraken\": [\n    \"Jared McCann\"\n  ],\n  \"Anaheim Ducks\": []\n}\n",
        )
        .unwrap();
        let store = StateStore::new(&path);

        store.save(&store.load()).unwrap();
        let first = fs::read(&path).unwrap();
        store.save(&store.load()).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(store.load().get("Seattle Kraken"), Some(&roster(&["Jared McCann"])));
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = TempDir::new().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        let mut state = PersistedState::default();
        state.insert("Boston Bruins", roster(&["A"]));
        store.save(&state).unwrap();
        state.insert("Boston Bruins", roster(&["B"]));
        store.save(&state).unwrap();

        assert_eq!(store.load().get("Boston Bruins"), Some(&roster(&["B"])));
    }

    #[test]
    fn test_save_below_a_file_fails() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();
        let store = StateStore::new(blocker.join("state.json"));

        let err = store.save(&PersistedState::default()).unwrap_err();
        assert!(matches!(err, StateError::Io { .. }));
    }
}
