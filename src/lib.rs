pub mod logging;
pub mod projects;
pub mod shared;
pub mod storage;
pub mod themes;

pub use projects::{init_projects_store, ProjectsStore};
pub use shared::errors::{DomainError, StorageError};
