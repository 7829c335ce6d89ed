use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::themes::{Palette, ThemeName};

fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Top-level named container of categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Session-scoped handle used by operations to address this entity.
    /// Never persisted; regenerated whenever the document is reloaded.
    #[serde(skip, default = "new_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A named, themed tab of to-do items inside a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    #[serde(skip, default = "new_id")]
    pub id: Uuid,
    pub name: String,
    /// The selected theme. Authoritative: `theme_settings` is a cache of its
    /// resolved palette and the two must only ever change together.
    pub theme_name: ThemeName,
    pub theme_settings: Palette,
    #[serde(default)]
    pub todo_items: Vec<Todo>,
}

/// A single to-do item with a completion flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    #[serde(skip, default = "new_id")]
    pub id: Uuid,
    pub text: String,
    pub is_checked: bool,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            categories: Vec::new(),
        }
    }
}

impl Category {
    /// New categories start on the Default theme with its resolved palette.
    pub fn new(name: impl Into<String>) -> Self {
        let theme_name = ThemeName::Default;
        Self {
            id: new_id(),
            name: name.into(),
            theme_name,
            theme_settings: theme_name.palette().clone(),
            todo_items: Vec::new(),
        }
    }
}

impl Todo {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            text: text.into(),
            is_checked: false,
        }
    }
}

// Equality compares domain fields only. Ids are session-scoped, so a reloaded
// document must compare equal to the one that was saved.

impl PartialEq for Project {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.categories == other.categories
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.theme_name == other.theme_name
            && self.theme_settings == other.theme_settings
            && self.todo_items == other.todo_items
    }
}

impl PartialEq for Todo {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.is_checked == other.is_checked
    }
}

impl Eq for Project {}
impl Eq for Category {}
impl Eq for Todo {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_shape_matches_data_file_format() {
        let mut category = Category::new("Chores");
        category.todo_items.push(Todo::new("Buy milk"));

        let mut project = Project::new("Home");
        project.categories.push(category);

        let json = serde_json::to_value(&project).unwrap();
        let palette = serde_json::to_value(ThemeName::Default.palette()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Home",
                "categories": [
                    {
                        "name": "Chores",
                        "theme_name": "Default",
                        "theme_settings": palette,
                        "todo_items": [
                            { "text": "Buy milk", "is_checked": false }
                        ]
                    }
                ]
            })
        );
    }

    #[test]
    fn test_ids_never_reach_the_serialized_form() {
        let project = Project::new("Home");
        let json = serde_json::to_value(&project).unwrap();
        assert!(json.get("id").is_none());
    }

    #[test]
    fn test_round_trip_preserves_entities_and_order() {
        let mut project = Project::new("Home");
        for name in ["Chores", "Garden", "Garage"] {
            let mut category = Category::new(name);
            category.todo_items.push(Todo::new(format!("{name} first")));
            category.todo_items.push(Todo::new(format!("{name} second")));
            project.categories.push(category);
        }
        project.categories[1].theme_name = ThemeName::Green;
        project.categories[1].theme_settings = ThemeName::Green.palette().clone();
        project.categories[1].todo_items[0].is_checked = true;

        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(back, project);
        let names: Vec<&str> = back.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Chores", "Garden", "Garage"]);
    }

    #[test]
    fn test_absent_collections_decode_to_empty() {
        let project: Project = serde_json::from_str(r#"{ "name": "Bare" }"#).unwrap();
        assert!(project.categories.is_empty());

        let category: Category = serde_json::from_value(serde_json::json!({
            "name": "Chores",
            "theme_name": "Red",
            "theme_settings": ThemeName::Red.palette(),
        }))
        .unwrap();
        assert!(category.todo_items.is_empty());
    }

    #[test]
    fn test_category_without_theme_name_is_an_error() {
        let result: Result<Category, _> = serde_json::from_value(serde_json::json!({
            "name": "Chores",
            "theme_settings": ThemeName::Default.palette(),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_theme_name_is_an_error() {
        let result: Result<Category, _> = serde_json::from_value(serde_json::json!({
            "name": "Chores",
            "theme_name": "Mauve",
            "theme_settings": ThemeName::Default.palette(),
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_reload_regenerates_ids() {
        let project = Project::new("Home");
        let json = serde_json::to_string(&project).unwrap();
        let back: Project = serde_json::from_str(&json).unwrap();

        assert_eq!(back, project);
        assert_ne!(back.id, project.id);
    }
}
