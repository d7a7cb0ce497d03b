use super::{ModeFlags, PolicyState, PolicyStore};
use crate::error::{QuackError, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

const LEGACY_FILENAME: &str = "blocked-bangs.json";
const MODES_FILENAME: &str = "blocked-bang-modes.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(QuackError::Io)?;
        }
        Ok(())
    }

    fn load_legacy(&self) -> BTreeSet<String> {
        let Ok(content) = fs::read_to_string(self.root.join(LEGACY_FILENAME)) else {
            return BTreeSet::new();
        };
        let Ok(tags) = serde_json::from_str::<Vec<String>>(&content) else {
            return BTreeSet::new();
        };
        tags.into_iter().map(|t| t.to_lowercase()).collect()
    }

    fn load_modes(&self) -> BTreeMap<String, ModeFlags> {
        let Ok(content) = fs::read_to_string(self.root.join(MODES_FILENAME)) else {
            return BTreeMap::new();
        };
        let Ok(modes) = serde_json::from_str::<BTreeMap<String, ModeFlags>>(&content) else {
            return BTreeMap::new();
        };
        modes
            .into_iter()
            .map(|(tag, flags)| (tag.to_lowercase(), flags))
            .collect()
    }
}

impl PolicyStore for FileStore {
    fn load_state(&self) -> PolicyState {
        PolicyState {
            legacy: self.load_legacy(),
            modes: self.load_modes(),
        }
    }

    fn save_state(&mut self, state: &PolicyState) -> Result<()> {
        self.ensure_dir()?;

        let legacy: Vec<&String> = state.legacy.iter().collect();
        let content = serde_json::to_string_pretty(&legacy).map_err(QuackError::Serialization)?;
        fs::write(self.root.join(LEGACY_FILENAME), content).map_err(QuackError::Io)?;

        let content =
            serde_json::to_string_pretty(&state.modes).map_err(QuackError::Serialization)?;
        fs::write(self.root.join(MODES_FILENAME), content).map_err(QuackError::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_load_as_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("does-not-exist"));
        assert_eq!(store.load_state(), PolicyState::default());
    }

    #[test]
    fn malformed_files_load_as_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEGACY_FILENAME), "{not json").unwrap();
        fs::write(dir.path().join(MODES_FILENAME), "[\"wrong\", \"shape\"]").unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.load_state(), PolicyState::default());
    }

    #[test]
    fn saved_state_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        let mut state = PolicyState::default();
        state.legacy.insert("gh".to_string());
        state.modes.insert(
            "yt".to_string(),
            ModeFlags {
                root: true,
                search: false,
            },
        );

        store.save_state(&state).unwrap();
        assert_eq!(store.load_state(), state);
    }

    #[test]
    fn loaded_tags_are_lowercased() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(LEGACY_FILENAME), r#"["GH"]"#).unwrap();
        fs::write(
            dir.path().join(MODES_FILENAME),
            r#"{"YT": {"root": true}}"#,
        )
        .unwrap();

        let store = FileStore::new(dir.path().to_path_buf());
        let state = store.load_state();
        assert!(state.legacy.contains("gh"));
        assert!(state.modes.contains_key("yt"));
        assert!(state.modes["yt"].root);
        assert!(!state.modes["yt"].search);
    }
}
