use uuid::Uuid;

use super::types::{Category, Project, Todo};

pub fn find_project(projects: &[Project], id: Uuid) -> Option<&Project> {
    projects.iter().find(|project| project.id == id)
}

pub fn find_project_mut(projects: &mut [Project], id: Uuid) -> Option<&mut Project> {
    projects.iter_mut().find(|project| project.id == id)
}

pub fn find_category(project: &Project, id: Uuid) -> Option<&Category> {
    project.categories.iter().find(|category| category.id == id)
}

pub fn find_category_mut(project: &mut Project, id: Uuid) -> Option<&mut Category> {
    project
        .categories
        .iter_mut()
        .find(|category| category.id == id)
}

pub fn find_todo(category: &Category, id: Uuid) -> Option<&Todo> {
    category.todo_items.iter().find(|todo| todo.id == id)
}

pub fn find_todo_mut(category: &mut Category, id: Uuid) -> Option<&mut Todo> {
    category.todo_items.iter_mut().find(|todo| todo.id == id)
}
