//! Dataset access
//!
//! The validator never touches the filesystem directly; it goes through a
//! `DataSource` so that synthetic trees can be validated in tests.

pub mod fs;
pub mod memory;

pub use fs::*;
pub use memory::*;

use std::io;
use std::path::Path;

/// Image extensions accepted for logos, flags and shields
pub const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif"];

/// Name of the record file inside every entity directory
pub const RECORD_FILE: &str = "data.json";

pub trait DataSource {
    /// Names of the sub-directories of `path`, sorted
    fn list_children(&self, path: &Path) -> io::Result<Vec<String>>;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    fn is_file(&self, path: &Path) -> bool;

    /// True if `dir/basename.<ext>` exists for any recognized image extension
    fn has_image(&self, dir: &Path, basename: &str) -> bool {
        IMAGE_EXTENSIONS
            .iter()
            .any(|ext| self.is_file(&dir.join(format!("{}.{}", basename, ext))))
    }
}
