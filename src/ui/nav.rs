//! Mobile navigation menu toggle

use std::collections::HashSet;

use crate::dom::{Document, NodeId};

/// Class applied to both the toggle control and the menu when open
pub const ACTIVE_CLASS: &str = "active";
/// Toggle control class
pub const TOGGLE_CLASS: &str = "hamburger";
/// Menu container class
pub const MENU_CLASS: &str = "nav-links";

/// Open/closed state of the mobile menu
#[derive(Debug, Clone)]
pub struct NavigationController {
    toggle: NodeId,
    menu: NodeId,
    open: bool,
    links: HashSet<NodeId>,
}

impl NavigationController {
    /// Bind to the page's toggle and menu.
    ///
    /// Returns `None` when either element is missing, which disables the
    /// feature for this page. The menu starts open if either element is
    /// marked active, and both are brought into that state.
    pub fn attach(doc: &mut Document) -> Option<Self> {
        let toggle = doc.query_class(TOGGLE_CLASS).into_iter().next()?;
        let menu = doc.query_class(MENU_CLASS).into_iter().next()?;
        let open = doc.has_class(menu, ACTIVE_CLASS) || doc.has_class(toggle, ACTIVE_CLASS);

        let mut controller = Self {
            toggle,
            menu,
            open,
            links: HashSet::new(),
        };
        controller.set_open(doc, open);
        controller.bind_links(menu_links(doc));
        Some(controller)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_node(&self) -> NodeId {
        self.toggle
    }

    /// Flip the menu state; returns whether it is now open
    pub fn toggle(&mut self, doc: &mut Document) -> bool {
        self.set_open(doc, !self.open);
        self.open
    }

    /// Force the menu closed
    pub fn close(&mut self, doc: &mut Document) {
        self.set_open(doc, false);
    }

    fn set_open(&mut self, doc: &mut Document, open: bool) {
        self.open = open;
        for node in [self.toggle, self.menu] {
            if open {
                doc.add_class(node, ACTIVE_CLASS);
            } else {
                doc.remove_class(node, ACTIVE_CLASS);
            }
        }
    }

    /// Attach close-on-activate to the given links
    pub fn bind_links(&mut self, links: impl IntoIterator<Item = NodeId>) {
        self.links.extend(links);
    }

    /// Whether activating `node` closes the menu
    pub fn is_menu_link(&self, node: NodeId) -> bool {
        self.links.contains(&node)
    }
}

/// Every anchor inside any navigation container
pub fn menu_links(doc: &Document) -> Vec<NodeId> {
    doc.query_class(MENU_CLASS)
        .into_iter()
        .flat_map(|container| doc.query_tag_within(container, "a"))
        .collect()
}
