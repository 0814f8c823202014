//! In-memory page document
//!
//! A small arena DOM: every node lives in a flat vector and is addressed by
//! its [`NodeId`]. Removing children only detaches them, so ids held by the
//! controllers never dangle; detached nodes are simply unreachable from the
//! root and ignored by every query.

mod parse;
mod serialize;

/// Index of a node in its [`Document`]
pub type NodeId = usize;

/// Node payload
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Document,
    Doctype(String),
    Element(Element),
    /// Plain text, escaped on output
    Text(String),
    Comment(String),
    /// Trusted markup inserted verbatim (the site's own content documents)
    Raw(String),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An element's tag name and attributes
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl Element {
    /// Create an element without attributes
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
        }
    }

    /// Get an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Set (or replace) an attribute value
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    /// Remove an attribute
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Iterate over the class list
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or("").split_whitespace()
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a class; returns false if it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        if self.has_class(class) {
            return false;
        }
        let mut list: Vec<&str> = self.classes().collect();
        list.push(class);
        let joined = list.join(" ");
        self.set_attr("class", &joined);
        true
    }

    /// Remove a class; returns false if it was absent
    pub fn remove_class(&mut self, class: &str) -> bool {
        if !self.has_class(class) {
            return false;
        }
        let joined = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", &joined);
        }
        true
    }

    /// Toggle a class; returns whether it is present afterwards
    pub fn toggle_class(&mut self, class: &str) -> bool {
        if self.remove_class(class) {
            false
        } else {
            self.add_class(class)
        }
    }
}

/// Builder for element trees inserted by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Element {
        element: Element,
        children: Vec<Fragment>,
    },
    Text(String),
    Raw(String),
}

impl Fragment {
    pub fn element(tag: &str) -> Self {
        Fragment::Element {
            element: Element::new(tag),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Fragment::Text(text.into())
    }

    /// Trusted markup, never escaped
    pub fn raw(html: impl Into<String>) -> Self {
        Fragment::Raw(html.into())
    }

    pub fn class(mut self, class: &str) -> Self {
        if let Fragment::Element { element, .. } = &mut self {
            element.add_class(class);
        }
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        if let Fragment::Element { element, .. } = &mut self {
            element.set_attr(name, value);
        }
        self
    }

    pub fn child(mut self, child: Fragment) -> Self {
        if let Fragment::Element { children, .. } = &mut self {
            children.push(child);
        }
        self
    }

    pub fn children(mut self, items: impl IntoIterator<Item = Fragment>) -> Self {
        if let Fragment::Element { children, .. } = &mut self {
            children.extend(items);
        }
        self
    }
}

/// A page document
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// The root node id
    pub const ROOT: NodeId = 0;

    /// Create an empty document
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Document,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Parse an HTML page
    pub fn parse(html: &str) -> Self {
        parse::parse_document(html)
    }

    /// Serialize the whole document
    pub fn to_html(&self) -> String {
        serialize::serialize_children(self, Self::ROOT)
    }

    /// Serialize the children of a node
    pub fn inner_html(&self, node: NodeId) -> String {
        serialize::serialize_children(self, node)
    }

    /// Serialize a node including itself
    pub fn outer_html(&self, node: NodeId) -> String {
        serialize::serialize_node(self, node)
    }

    pub fn kind(&self, node: NodeId) -> Option<&NodeKind> {
        self.nodes.get(node).map(|n| &n.kind)
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        match self.kind(node) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(node).map(|n| &mut n.kind) {
            Some(NodeKind::Element(el)) => Some(el),
            _ => None,
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    /// Whether a node is reachable from the root
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == Self::ROOT {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// All descendants of `node` in document order (excluding `node`)
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// `node` followed by its ancestors up to the root
    pub fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            out.push(id);
            current = self.parent(id);
        }
        out
    }

    /// Find the first attached element with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(Self::ROOT)
            .into_iter()
            .find(|&n| self.element(n).and_then(Element::id) == Some(id))
    }

    /// All attached elements carrying `class`
    pub fn query_class(&self, class: &str) -> Vec<NodeId> {
        self.query_class_within(Self::ROOT, class)
    }

    /// Elements carrying `class` below `root`
    pub fn query_class_within(&self, root: NodeId, class: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| self.element(n).is_some_and(|el| el.has_class(class)))
            .collect()
    }

    /// Elements with the given tag name below `root`
    pub fn query_tag_within(&self, root: NodeId, tag: &str) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&n| self.element(n).is_some_and(|el| el.tag == tag))
            .collect()
    }

    /// All attached elements with the given tag name
    pub fn query_tag(&self, tag: &str) -> Vec<NodeId> {
        self.query_tag_within(Self::ROOT, tag)
    }

    /// Concatenated text of a node's subtree (raw markup included as-is)
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for id in std::iter::once(node).chain(self.descendants(node)) {
            match self.kind(id) {
                Some(NodeKind::Text(t)) | Some(NodeKind::Raw(t)) => out.push_str(t),
                _ => {}
            }
        }
        out
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) -> bool {
        self.element_mut(node)
            .map(|el| el.add_class(class))
            .unwrap_or(false)
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) -> bool {
        self.element_mut(node)
            .map(|el| el.remove_class(class))
            .unwrap_or(false)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_class(class))
    }

    /// Append a new node under `parent`
    pub fn append(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        if let Some(p) = self.nodes.get_mut(parent) {
            p.children.push(id);
        }
        id
    }

    /// Append a fragment tree under `parent`, returning its top node
    pub fn append_fragment(&mut self, parent: NodeId, fragment: Fragment) -> NodeId {
        match fragment {
            Fragment::Element { element, children } => {
                let id = self.append(parent, NodeKind::Element(element));
                for child in children {
                    self.append_fragment(id, child);
                }
                id
            }
            Fragment::Text(text) => self.append(parent, NodeKind::Text(text)),
            Fragment::Raw(html) => self.append(parent, NodeKind::Raw(html)),
        }
    }

    /// Detach every child of `node`
    pub fn clear_children(&mut self, node: NodeId) {
        let old = match self.nodes.get_mut(node) {
            Some(n) => std::mem::take(&mut n.children),
            None => return,
        };
        for child in old {
            if let Some(c) = self.nodes.get_mut(child) {
                c.parent = None;
            }
        }
    }

    /// Replace the children of `node` with the given fragments
    pub fn replace_children(
        &mut self,
        node: NodeId,
        fragments: impl IntoIterator<Item = Fragment>,
    ) -> Vec<NodeId> {
        self.clear_children(node);
        fragments
            .into_iter()
            .map(|f| self.append_fragment(node, f))
            .collect()
    }

    /// Replace the children of `node` with plain text
    pub fn set_text_content(&mut self, node: NodeId, text: &str) {
        self.replace_children(node, [Fragment::text(text)]);
    }

    /// Replace the children of `node` with trusted markup
    pub fn set_inner_html(&mut self, node: NodeId, html: &str) {
        self.replace_children(node, [Fragment::raw(html)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        let mut el = Element::new("div");
        assert!(el.add_class("a"));
        assert!(!el.add_class("a"));
        assert!(el.add_class("b"));
        assert_eq!(el.attr("class"), Some("a b"));
        assert!(!el.toggle_class("a"));
        assert_eq!(el.attr("class"), Some("b"));
        assert!(el.toggle_class("a"));
        assert!(el.remove_class("b"));
        assert!(el.remove_class("a"));
        assert_eq!(el.attr("class"), None);
    }

    #[test]
    fn test_replace_children_detaches_old_nodes() {
        let mut doc = Document::new();
        let body = doc.append(Document::ROOT, NodeKind::Element(Element::new("body")));
        let old = doc.append_fragment(body, Fragment::element("p").attr("id", "old"));
        assert_eq!(doc.get_element_by_id("old"), Some(old));

        let new = doc.replace_children(
            body,
            [Fragment::element("div").class("card").child(Fragment::text("x"))],
        );
        assert_eq!(new.len(), 1);
        assert!(!doc.is_attached(old));
        assert_eq!(doc.get_element_by_id("old"), None);
        assert_eq!(doc.query_class("card"), new);
        assert_eq!(doc.text_content(body), "x");
    }

    #[test]
    fn test_ancestors() {
        let mut doc = Document::new();
        let outer = doc.append_fragment(
            Document::ROOT,
            Fragment::element("div").child(Fragment::element("span")),
        );
        let span = doc.children(outer)[0];
        assert_eq!(doc.ancestors(span), vec![span, outer, Document::ROOT]);
    }
}
