//! Category tree and breadcrumb resolution.

use crate::wire::{id_from_string_or_number, optional_id_from_string_or_number};
use serde::{Deserialize, Deserializer, Serialize};

/// A node in the category forest returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "optional_id_from_string_or_number")]
    pub parent_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "children_or_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<Category>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            children: Vec::new(),
        }
    }

    /// Appends `child`, setting its `parent_id` to this node.
    pub fn with_child(mut self, mut child: Category) -> Self {
        child.parent_id = Some(self.id.clone());
        self.children.push(child);
        self
    }
}

fn children_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Category>, D::Error> {
    Ok(Option::<Vec<Category>>::deserialize(deserializer)?.unwrap_or_default())
}

/// One entry of a root-to-leaf breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub id: String,
    pub name: String,
    pub href: String,
}

impl From<&Category> for Breadcrumb {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            href: format!("/categories/{}", category.id),
        }
    }
}

/// Finds the path from a root of `forest` down to the category `target_id`.
///
/// Search is depth-first in sibling order and stops at the first match.
/// Returns `None` when the id does not occur in the forest.
pub fn find_category_path(forest: &[Category], target_id: &str) -> Option<Vec<Breadcrumb>> {
    let mut trail = Vec::new();
    if descend(forest, target_id, &mut trail) {
        Some(trail)
    } else {
        None
    }
}

fn descend(nodes: &[Category], target_id: &str, trail: &mut Vec<Breadcrumb>) -> bool {
    for node in nodes {
        trail.push(Breadcrumb::from(node));
        if node.id == target_id || descend(&node.children, target_id, trail) {
            return true;
        }
        trail.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<Category> {
        vec![
            Category::new("1", "Electronics")
                .with_child(Category::new("11", "Phones"))
                .with_child(Category::new("12", "Laptops")),
            Category::new("2", "Home")
                .with_child(Category::new("21", "Kitchen").with_child(Category::new("211", "Kettles")))
                .with_child(Category::new("22", "Garden")),
        ]
    }

    fn ids(path: &[Breadcrumb]) -> Vec<&str> {
        path.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_finds_second_level_under_later_sibling() {
        let path = find_category_path(&forest(), "22").unwrap();
        assert_eq!(ids(&path), vec!["2", "22"]);
        assert_eq!(path[1].name, "Garden");
        assert_eq!(path[1].href, "/categories/22");
    }

    #[test]
    fn test_finds_root_and_deep_nodes() {
        assert_eq!(ids(&find_category_path(&forest(), "1").unwrap()), vec!["1"]);
        assert_eq!(
            ids(&find_category_path(&forest(), "211").unwrap()),
            vec!["2", "21", "211"]
        );
    }

    #[test]
    fn test_absent_id_and_empty_forest() {
        assert!(find_category_path(&forest(), "999").is_none());
        assert!(find_category_path(&[], "1").is_none());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_ids() {
        let forest = vec![
            Category::new("a", "A").with_child(Category::new("dup", "First")),
            Category::new("b", "B").with_child(Category::new("dup", "Second")),
        ];
        let path = find_category_path(&forest, "dup").unwrap();
        assert_eq!(ids(&path), vec!["a", "dup"]);
        assert_eq!(path[1].name, "First");
    }

    #[test]
    fn test_deserializes_wire_shape_without_children() {
        let json = r#"[{"id":"1","name":"Books","parentId":null,
                        "children":[{"id":"5","name":"Fiction","parentId":"1","children":null}]}]"#;
        let forest: Vec<Category> = serde_json::from_str(json).unwrap();
        assert!(forest[0].children[0].children.is_empty());
        assert_eq!(forest[0].children[0].parent_id.as_deref(), Some("1"));
        assert_eq!(ids(&find_category_path(&forest, "5").unwrap()), vec!["1", "5"]);
    }

    #[test]
    fn test_numeric_ids_are_normalized() {
        let json = r#"[{"id":3,"name":"Toys","children":[{"id":30,"name":"Puzzles","parentId":3}]}]"#;
        let forest: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(forest[0].parent_id, None);
        assert_eq!(ids(&find_category_path(&forest, "30").unwrap()), vec!["3", "30"]);
    }
}
