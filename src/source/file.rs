use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{clean_lines, HashSource};

pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl HashSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn hashes(&self) -> Result<Box<dyn Iterator<Item = Result<String>>>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open hash list: {}", self.path.display()))?;
        let path = self.path.clone();
        // The reader owns the handle; it closes when the iterator is dropped.
        Ok(Box::new(clean_lines(BufReader::new(file).lines()).map(
            move |line| line.with_context(|| format!("Failed to read hash list: {}", path.display())),
        )))
    }
}
