//! Import/export of the projects data: the whole hierarchy is saved as one
//! JSON document so it does not have to be recreated every launch.

use std::fs;
use std::path::{Path, PathBuf};

use crate::projects::types::Project;
use crate::shared::errors::StorageError;
use crate::shared::paths::{ensure_dir, get_storage_dir};

/// Path of the single JSON document holding every project.
pub fn get_data_path() -> PathBuf {
    get_storage_dir().join("data.json")
}

/// Load all projects from the data file.
/// A missing file means a first run and yields an empty collection.
pub fn load() -> Result<Vec<Project>, StorageError> {
    load_from(&get_data_path())
}

pub fn load_from(path: &Path) -> Result<Vec<Project>, StorageError> {
    if !path.exists() {
        tracing::info!(target: "storage", path = %path.display(), "No data file, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path).map_err(StorageError::Read)?;
    let projects: Vec<Project> = serde_json::from_str(&content)?;

    tracing::info!(
        target: "storage",
        path = %path.display(),
        count = projects.len(),
        "Loaded projects"
    );
    Ok(projects)
}

/// Save the full collection, replacing any previous content of the data
/// file. Every save persists the complete current state.
pub fn save(projects: &[Project]) -> Result<(), StorageError> {
    save_to(&get_data_path(), projects)
}

pub fn save_to(path: &Path, projects: &[Project]) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir).map_err(StorageError::Directory)?;
    }

    let content = serde_json::to_string_pretty(projects)?;

    // Write a sibling file and rename it into place, so a crash mid-write
    // cannot leave a truncated document behind.
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content).map_err(StorageError::Write)?;
    fs::rename(&tmp, path).map_err(StorageError::Write)?;

    tracing::debug!(
        target: "storage",
        path = %path.display(),
        count = projects.len(),
        "Saved projects"
    );
    Ok(())
}
