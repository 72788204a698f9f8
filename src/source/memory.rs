use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::{DataSource, RECORD_FILE};

/// In-memory dataset tree, used to validate synthetic datasets
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories
    pub fn add_file(&mut self, path: impl AsRef<Path>, contents: impl Into<String>) -> &mut Self {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.insert(path.to_path_buf(), contents.into());
        self
    }

    /// Add `dir/data.json`
    pub fn add_record(&mut self, dir: impl AsRef<Path>, json: impl Into<String>) -> &mut Self {
        self.add_file(dir.as_ref().join(RECORD_FILE), json)
    }

    /// Add `dir/basename.svg`
    pub fn add_image(&mut self, dir: impl AsRef<Path>, basename: &str) -> &mut Self {
        self.add_file(dir.as_ref().join(format!("{}.svg", basename)), "<svg/>")
    }

    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> &mut Self {
        for ancestor in dir.as_ref().ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.dirs.insert(ancestor.to_path_buf());
        }
        self
    }

    pub fn remove_file(&mut self, path: impl AsRef<Path>) -> Option<String> {
        self.files.remove(path.as_ref())
    }
}

impl DataSource for MemorySource {
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        if !path.as_os_str().is_empty() && !self.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{:?} does not exist", path),
            ));
        }

        let children = self
            .dirs
            .iter()
            .filter(|dir| dir.parent() == Some(path))
            .filter_map(|dir| dir.file_name().and_then(|n| n.to_str()))
            .map(str::to_string)
            .collect();

        Ok(children)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{:?} does not exist", path))
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }
}
