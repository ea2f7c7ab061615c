//! Local file data source
//!
//! Reads a JSON file with the same shape the endpoint serves, for offline use.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::{DataSource, LoadResult};

/// Reads the dataset body from a file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait(?Send)]
impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> LoadResult<String> {
        Ok(tokio::fs::read_to_string(&self.path).await?)
    }
}
