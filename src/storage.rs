//! On-disk persistence: the whole store is saved and loaded as one JSON blob.
//! No versioning and no partial loads; a blob written by an incompatible
//! store shape fails to parse.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::store::Assistant;

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Storage at the default per-user location.
    pub fn open() -> Result<Self> {
        Ok(Self::at(Self::default_path()?))
    }

    /// Storage backed by an explicit file.
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join("contactbook").join("contactbook.json"))
    }

    /// Load the store, or start fresh when no data file exists yet.
    pub fn load(&self) -> Result<Assistant> {
        if !self.path.exists() {
            return Ok(Assistant::new());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let assistant = serde_json::from_str(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(assistant)
    }

    pub fn save(&self, assistant: &Assistant) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(assistant)?;
        fs::write(&self.path, data).with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn round_trips_the_whole_store() {
        let file = NamedTempFile::new().unwrap();
        let storage = Storage::at(file.path().to_path_buf());

        let mut assistant = Assistant::new();
        assistant
            .add_record("alice", "0501234567", Some("a@b.co"), None, Some("12.06.1990"))
            .unwrap();
        assistant.add_note("draft", "hello").unwrap();
        assistant.create_tag("work").unwrap();
        assistant.add_tag_to_note("draft", "work").unwrap();
        assistant.link_note_to_record("alice", "draft").unwrap();

        storage.save(&assistant).unwrap();
        let loaded = storage.load().unwrap();

        assert!(loaded.record_exists("alice"));
        assert!(loaded.phone_exists("0501234567"));
        assert_eq!(loaded.get_note("draft").unwrap().tags, ["work"]);
        assert_eq!(loaded.get_record("alice").unwrap().notes, ["draft"]);
        assert_eq!(loaded.get_notes_by_tag("work").len(), 1);
    }

    #[test]
    fn missing_file_loads_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::at(dir.path().join("nothing-here.json"));
        let assistant = storage.load().unwrap();
        assert!(assistant.get_records().is_empty());
        assert!(assistant.get_notes().is_empty());
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::at(dir.path().join("deep").join("data.json"));
        storage.save(&Assistant::new()).unwrap();
        assert!(storage.load().is_ok());
    }

    #[test]
    fn garbage_blob_is_an_error_not_a_fresh_store() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "not json at all").unwrap();
        let storage = Storage::at(file.path().to_path_buf());
        assert!(storage.load().is_err());
    }
}
