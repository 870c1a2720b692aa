use super::StorageBackend;
use crate::error::{EduError, Result};
use crate::model::EducationEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "education.json";

/// On-disk layout: one named record holding the full entry sequence.
#[derive(Debug, Default, Deserialize)]
struct PersistedState {
    entries: Vec<EducationEntry>,
}

#[derive(Serialize)]
struct PersistedStateRef<'a> {
    entries: &'a [EducationEntry],
}

/// Production backend: one JSON file in a data directory, rewritten in full
/// on every save.
pub struct FsBackend {
    data_dir: PathBuf,
    file_name: String,
}

impl FsBackend {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, name: &str) -> Self {
        self.file_name = name.to_string();
        self
    }

    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.data_dir.exists() {
            fs::create_dir_all(&self.data_dir).map_err(EduError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn load(&self) -> Result<Vec<EducationEntry>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(data_file).map_err(EduError::Io)?;
        let state: PersistedState =
            serde_json::from_str(&content).map_err(EduError::Serialization)?;
        Ok(state.entries)
    }

    fn save(&self, entries: &[EducationEntry]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(&PersistedStateRef { entries })
            .map_err(EduError::Serialization)?;

        // Atomic write: never leave a half-written state file behind.
        let tmp_file = self.data_dir.join(format!(".{}.tmp", self.file_name));
        fs::write(&tmp_file, content).map_err(EduError::Io)?;
        fs::rename(&tmp_file, self.data_file()).map_err(EduError::Io)?;
        Ok(())
    }
}
