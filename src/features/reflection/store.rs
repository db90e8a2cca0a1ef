//! Flat-file reflection storage.
//!
//! Each subject gets a directory under the study root; each day gets one
//! append-only text file. Blocks are never rewritten or deleted.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::core::traits::ReflectionSink;
use crate::error::SeshError;

use super::record::ReflectionRecord;

/// Appends reflection blocks under `<study-root>/<subject>/`.
#[derive(Debug, Clone)]
pub struct FileReflectionStore {
    study_root: PathBuf,
}

impl FileReflectionStore {
    #[must_use]
    pub const fn new(study_root: PathBuf) -> Self {
        Self { study_root }
    }

    fn subject_dir(&self, subject: &str) -> PathBuf {
        self.study_root.join(subject)
    }
}

impl ReflectionSink for FileReflectionStore {
    fn append(&self, record: &ReflectionRecord) -> Result<PathBuf, SeshError> {
        let dir = self.subject_dir(&record.subject);
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(record.file_name());
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(record.render().as_bytes())?;

        Ok(path)
    }
}
