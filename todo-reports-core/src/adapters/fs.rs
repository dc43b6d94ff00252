//! Local filesystem report store
//!
//! Each key is a file name inside one report directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::ports::ReportStore;

/// Directory-backed implementation of [`ReportStore`]
#[derive(Debug, Clone)]
pub struct FsReportStore {
    dir: PathBuf,
}

impl FsReportStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl ReportStore for FsReportStore {
    fn ensure(&self) -> Result<()> {
        if !self.dir.exists() {
            debug!(dir = %self.dir.display(), "creating report directory");
        }
        fs::create_dir_all(&self.dir).map_err(|e| Error::write(&self.dir, e))
    }

    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.path(key).try_exists()?)
    }

    fn rename(&self, from: &str, to: &str) -> Result<()> {
        let to_path = self.path(to);
        fs::rename(self.path(from), &to_path).map_err(|e| Error::write(to_path, e))
    }

    fn put(&self, key: &str, body: &str) -> Result<()> {
        let path = self.path(key);
        fs::write(&path, body).map_err(|e| Error::write(path, e))
    }

    fn get(&self, key: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(key))?)
    }
}
