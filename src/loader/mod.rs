//! Registry loaders, one per top-level dataset directory

pub mod competitions;
pub mod geo;
pub mod stadiums;
pub mod teams;

pub use competitions::*;
pub use geo::*;
pub use stadiums::*;
pub use teams::*;

use std::io;
use std::path::Path;

use crate::error::{EntityRef, Result, ValidationError};
use crate::source::DataSource;

/// List the entity directories under `dir`
fn list_children(source: &impl DataSource, dir: &Path, owner: &EntityRef) -> Result<Vec<String>> {
    source.list_children(dir).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ValidationError::MissingFile {
            entity: owner.clone(),
            path: dir.to_path_buf(),
        },
        _ => ValidationError::MalformedRecord {
            entity: owner.clone(),
            reason: format!("cannot list {}: {}", dir.display(), e),
        },
    })
}

fn require_image(source: &impl DataSource, dir: &Path, entity: &EntityRef, image: &str) -> Result<()> {
    if source.has_image(dir, image) {
        Ok(())
    } else {
        Err(ValidationError::MissingImage {
            entity: entity.clone(),
            image: image.to_string(),
        })
    }
}

fn require_declared(entity: &EntityRef, parent: &EntityRef, declared: bool) -> Result<()> {
    if declared {
        Ok(())
    } else {
        Err(ValidationError::UndeclaredChild {
            entity: entity.clone(),
            parent: parent.clone(),
        })
    }
}
