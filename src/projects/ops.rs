//! Mutation operations over the project hierarchy.
//!
//! All operations take the entities they act on as explicit parameters and
//! do no I/O; the shell decides when to persist through `storage::save`.
//! Every `Err` leaves the model exactly as it was.

use uuid::Uuid;

use super::helpers::{find_category_mut, find_project_mut, find_todo_mut};
use super::types::{Category, Project, Todo};
use crate::shared::errors::DomainError;
use crate::themes::ThemeName;

/// Append a new project with no categories. The name must be non-empty
/// (after trimming) and not already used by another project.
pub fn add_project(projects: &mut Vec<Project>, name: &str) -> Result<Uuid, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyName("Project"));
    }
    if projects.iter().any(|p| p.name == name) {
        return Err(DomainError::DuplicateName("Project", name.to_string()));
    }

    let project = Project::new(name);
    let id = project.id;
    projects.push(project);

    tracing::debug!(target: "projects", name, "Project added");
    Ok(id)
}

/// Remove a project and everything it contains.
pub fn remove_project(projects: &mut Vec<Project>, id: Uuid) -> Result<(), DomainError> {
    if !projects.iter().any(|p| p.id == id) {
        return Err(DomainError::NotFound("Project", id.to_string()));
    }
    projects.retain(|p| p.id != id);

    tracing::debug!(target: "projects", %id, "Project removed");
    Ok(())
}

/// Rename a project. Same validation as `add_project`; renaming a project
/// to its own current name is allowed.
pub fn rename_project(
    projects: &mut Vec<Project>,
    id: Uuid,
    name: &str,
) -> Result<(), DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyName("Project"));
    }
    if projects.iter().any(|p| p.id != id && p.name == name) {
        return Err(DomainError::DuplicateName("Project", name.to_string()));
    }

    let project = find_project_mut(projects, id)
        .ok_or_else(|| DomainError::NotFound("Project", id.to_string()))?;
    project.name = name.to_string();
    Ok(())
}

/// Append a new category on the Default theme. The name must be non-empty
/// (after trimming) and unique within the project. The returned id is what
/// the shell should make the active category.
pub fn add_category(project: &mut Project, name: &str) -> Result<Uuid, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyName("Category"));
    }
    if project.categories.iter().any(|c| c.name == name) {
        return Err(DomainError::DuplicateName("Category", name.to_string()));
    }

    let category = Category::new(name);
    let id = category.id;
    project.categories.push(category);

    tracing::debug!(target: "projects", project = %project.name, name, "Category added");
    Ok(id)
}

/// Remove a category and return the sibling that should become active:
/// the category that followed the removed one, else the one before it,
/// else `None` when the project has no categories left.
pub fn remove_category(project: &mut Project, id: Uuid) -> Result<Option<Uuid>, DomainError> {
    let index = project
        .categories
        .iter()
        .position(|c| c.id == id)
        .ok_or_else(|| DomainError::NotFound("Category", id.to_string()))?;
    project.categories.remove(index);

    let next_active = if index < project.categories.len() {
        Some(project.categories[index].id)
    } else {
        project.categories.last().map(|c| c.id)
    };

    tracing::debug!(target: "projects", project = %project.name, %id, "Category removed");
    Ok(next_active)
}

/// Rename a category. Same validation as `add_category`; its own current
/// name is allowed.
pub fn rename_category(project: &mut Project, id: Uuid, name: &str) -> Result<(), DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyName("Category"));
    }
    if project.categories.iter().any(|c| c.id != id && c.name == name) {
        return Err(DomainError::DuplicateName("Category", name.to_string()));
    }

    let category = find_category_mut(project, id)
        .ok_or_else(|| DomainError::NotFound("Category", id.to_string()))?;
    category.name = name.to_string();
    Ok(())
}

/// Switch a category to the named theme. The name must be one of
/// `ThemeName::ALL`; `theme_name` and the cached `theme_settings` change
/// together, never independently.
pub fn set_category_theme(category: &mut Category, theme: &str) -> Result<(), DomainError> {
    let theme =
        ThemeName::from_name(theme).ok_or_else(|| DomainError::UnknownTheme(theme.to_string()))?;

    category.theme_name = theme;
    category.theme_settings = theme.palette().clone();

    tracing::debug!(target: "projects", category = %category.name, theme = theme.name(), "Theme changed");
    Ok(())
}

/// Append a new unchecked to-do item. The text must be non-empty after
/// trimming; duplicates are fine.
pub fn add_todo(category: &mut Category, text: &str) -> Result<Uuid, DomainError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DomainError::EmptyName("To-do"));
    }

    let todo = Todo::new(text);
    let id = todo.id;
    category.todo_items.push(todo);

    tracing::debug!(target: "projects", category = %category.name, "To-do added");
    Ok(id)
}

/// Remove a to-do item. Removing one that is already gone reports
/// `NotFound` rather than silently doing nothing.
pub fn remove_todo(category: &mut Category, id: Uuid) -> Result<(), DomainError> {
    if !category.todo_items.iter().any(|t| t.id == id) {
        return Err(DomainError::NotFound("To-do", id.to_string()));
    }
    category.todo_items.retain(|t| t.id != id);

    tracing::debug!(target: "projects", category = %category.name, %id, "To-do removed");
    Ok(())
}

/// Store a to-do item's completion flag.
pub fn set_todo_checked(category: &mut Category, id: Uuid, checked: bool) -> Result<(), DomainError> {
    let todo = find_todo_mut(category, id)
        .ok_or_else(|| DomainError::NotFound("To-do", id.to_string()))?;
    todo.is_checked = checked;
    Ok(())
}
