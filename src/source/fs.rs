use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::DataSource;

/// Dataset rooted at a directory on disk
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for FsSource {
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut children = Vec::new();

        for entry in fs::read_dir(self.root.join(path))? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                children.push(name.to_string());
            } else {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("non UTF-8 entry in {:?}", path),
                ));
            }
        }

        children.sort();
        Ok(children)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(self.root.join(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.root.join(path).is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_only_directories_sorted() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("teams/zeta")).unwrap();
        fs::create_dir_all(dir.path().join("teams/alpha")).unwrap();
        fs::write(dir.path().join("teams/readme.txt"), "x").unwrap();
        fs::write(dir.path().join("teams/alpha/shield.png"), "x").unwrap();

        let source = FsSource::new(dir.path());
        assert_eq!(
            source.list_children(Path::new("teams")).unwrap(),
            vec!["alpha", "zeta"]
        );
        assert!(source.has_image(Path::new("teams/alpha"), "shield"));
        assert!(!source.has_image(Path::new("teams/zeta"), "shield"));
        assert!(source.list_children(Path::new("missing")).is_err());
    }
}
