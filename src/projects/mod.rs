pub mod helpers;
pub mod ops;
pub mod types;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use types::Project;

use crate::shared::errors::StorageError;

/// Thread-safe in-memory store seeded from the data file.
pub struct ProjectsStore(pub RwLock<Vec<Project>>);

impl ProjectsStore {
    pub fn new(projects: Vec<Project>) -> Self {
        Self(RwLock::new(projects))
    }

    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        self.0.read().unwrap()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.0.write().unwrap()
    }
}

/// Initialize the projects store from the data file.
pub fn init_projects_store() -> Result<ProjectsStore, StorageError> {
    let projects = crate::storage::load()?;
    tracing::info!(
        target: "projects",
        "Projects store initialized: {} projects, {} categories",
        projects.len(),
        projects.iter().map(|p| p.categories.len()).sum::<usize>()
    );
    Ok(ProjectsStore::new(projects))
}
