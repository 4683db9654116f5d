//! Navigation menu registry
//!
//! An ordered mapping from top-level menu label to an ordered list of
//! submenu labels, populated from `menulist` directive bodies and read by
//! every page assembly of the same build run. The registry lives in the
//! run's `BuildContext` rather than process-global state.

use crate::processor::host_options;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena};
use indexmap::IndexMap;

/// Ordered menu-label to submenu-list mapping
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    menu: IndexMap<String, Vec<String>>,
}

impl MenuRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a top-level menu label. Idempotent: an existing label
    /// keeps its submenu list and its insertion position.
    pub fn add_menu(&mut self, menu: impl Into<String>) {
        self.menu.entry(menu.into()).or_default();
    }

    /// Append a submenu label under a top-level label, registering the
    /// top-level label first if absent. Duplicates are allowed.
    pub fn add_submenu(&mut self, menu: impl Into<String>, submenu: impl Into<String>) {
        self.menu.entry(menu.into()).or_default().push(submenu.into());
    }

    /// The top-level labels, in first-insertion order
    pub fn keys(&self) -> Vec<&str> {
        self.menu.keys().map(String::as_str).collect()
    }

    /// The submenu list for a label, if registered
    pub fn get(&self, menu: &str) -> Option<&[String]> {
        self.menu.get(menu).map(Vec::as_slice)
    }

    /// Whether no menu has been registered
    pub fn is_empty(&self) -> bool {
        self.menu.is_empty()
    }

    /// Number of registered top-level labels
    pub fn len(&self) -> usize {
        self.menu.len()
    }

    /// Populate the registry from a `menulist` directive body.
    ///
    /// The body is parsed as markdown. When its first node is a bullet
    /// list, every top-level bullet item registers a menu and each bullet
    /// item nested below it registers a submenu of that menu, in document
    /// order. Anything else is silently ignored.
    pub fn populate_from_markdown(&mut self, content: &str) {
        let arena = Arena::new();
        let root = parse_document(&arena, content, &host_options());

        let first_is_bullets = root
            .first_child()
            .map(is_bullet_list)
            .unwrap_or(false);
        if !first_is_bullets {
            return;
        }

        for list in root.children().filter(|n| is_bullet_list(n)) {
            for item in list.children() {
                let Some(label) = item_label(item) else {
                    continue;
                };
                self.add_menu(label.as_str());

                for nested in item.descendants().skip(1) {
                    if !matches!(nested.data.borrow().value, NodeValue::Item(_)) {
                        continue;
                    }
                    if let Some(sub) = item_label(nested) {
                        self.add_submenu(label.as_str(), sub);
                    }
                }
            }
        }
    }
}

fn is_bullet_list<'a>(node: &'a AstNode<'a>) -> bool {
    match node.data.borrow().value {
        NodeValue::List(ref list) => list.list_type == ListType::Bullet,
        _ => false,
    }
}

/// The label of a list item: the text of its first paragraph
fn item_label<'a>(item: &'a AstNode<'a>) -> Option<String> {
    let para = item
        .children()
        .find(|n| matches!(n.data.borrow().value, NodeValue::Paragraph))?;
    let label = collect_text(para);
    if label.is_empty() {
        None
    } else {
        Some(label)
    }
}

/// Collect the plain text of a subtree
pub(crate) fn collect_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut out = String::new();
    for n in node.descendants() {
        match n.data.borrow().value {
            NodeValue::Text(ref s) => out.push_str(s),
            NodeValue::Code(ref code) => out.push_str(&code.literal),
            NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_ordering() {
        let mut registry = MenuRegistry::new();
        registry.add_menu("A");
        registry.add_submenu("A", "x");
        registry.add_submenu("A", "y");

        assert_eq!(registry.keys(), vec!["A"]);
        assert_eq!(
            registry.get("A"),
            Some(["x".to_string(), "y".to_string()].as_slice())
        );
    }

    #[test]
    fn test_add_menu_idempotent() {
        let mut registry = MenuRegistry::new();
        registry.add_submenu("A", "x");
        registry.add_menu("A");

        assert_eq!(registry.get("A").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_add_submenu_registers_parent() {
        let mut registry = MenuRegistry::new();
        registry.add_submenu("B", "z");

        assert_eq!(registry.keys(), vec!["B"]);
        assert_eq!(registry.get("B"), Some(["z".to_string()].as_slice()));
    }

    #[test]
    fn test_duplicate_submenus_allowed() {
        let mut registry = MenuRegistry::new();
        registry.add_submenu("A", "x");
        registry.add_submenu("A", "x");

        assert_eq!(registry.get("A").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_unknown_menu() {
        let registry = MenuRegistry::new();
        assert_eq!(registry.get("missing"), None);
    }

    #[test]
    fn test_populate_from_bullet_list() {
        let mut registry = MenuRegistry::new();
        registry.populate_from_markdown(
            "- Home\n  - Dashboard\n  - Inbox\n- Admin\n  - Users\n",
        );

        assert_eq!(registry.keys(), vec!["Home", "Admin"]);
        assert_eq!(
            registry.get("Home"),
            Some(["Dashboard".to_string(), "Inbox".to_string()].as_slice())
        );
        assert_eq!(
            registry.get("Admin"),
            Some(["Users".to_string()].as_slice())
        );
    }

    #[test]
    fn test_populate_flattens_deeper_nesting() {
        let mut registry = MenuRegistry::new();
        registry.populate_from_markdown("- Top\n  - Mid\n    - Deep\n");

        assert_eq!(registry.keys(), vec!["Top"]);
        assert_eq!(
            registry.get("Top"),
            Some(["Mid".to_string(), "Deep".to_string()].as_slice())
        );
    }

    #[test]
    fn test_populate_menu_without_submenus() {
        let mut registry = MenuRegistry::new();
        registry.populate_from_markdown("- Only\n");

        assert_eq!(registry.keys(), vec!["Only"]);
        assert_eq!(registry.get("Only").map(<[String]>::len), Some(0));
    }

    #[test]
    fn test_populate_ignores_non_list_content() {
        let mut registry = MenuRegistry::new();
        registry.populate_from_markdown("Just a paragraph.\n\n- Too late\n");

        assert!(registry.is_empty());
    }

    #[test]
    fn test_populate_ignores_ordered_list() {
        let mut registry = MenuRegistry::new();
        registry.populate_from_markdown("1. First\n2. Second\n");

        assert!(registry.is_empty());
    }

    #[test]
    fn test_populate_ignores_empty_body() {
        let mut registry = MenuRegistry::new();
        registry.populate_from_markdown("");

        assert!(registry.is_empty());
    }
}
