//! Same-page anchor interception

use std::collections::HashMap;

use crate::dom::{Document, NodeId};

/// Result of activating an anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Not an intercepted anchor; default navigation proceeds
    Ignored,
    /// Default navigation suppressed, no target to scroll to
    Suppressed,
    /// Default navigation suppressed, smooth-scroll the target into view
    ScrollTo(NodeId),
}

/// Intercepts `#`-prefixed anchors registered at page init
#[derive(Debug, Clone, Default)]
pub struct SmoothScrollController {
    anchors: HashMap<NodeId, String>,
}

impl SmoothScrollController {
    /// Register every anchor whose href begins with `#`.
    ///
    /// Hrefs such as `page.html#part` are left alone so cross-page anchors
    /// keep navigating normally.
    pub fn attach(doc: &Document) -> Self {
        let anchors = doc
            .query_tag("a")
            .into_iter()
            .filter_map(|node| {
                let href = doc.element(node)?.attr("href")?;
                href.starts_with('#').then(|| (node, href.to_string()))
            })
            .collect();
        Self { anchors }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn handles(&self, node: NodeId) -> bool {
        self.anchors.contains_key(&node)
    }

    /// Handle activation of `node`
    pub fn activate(&self, doc: &Document, node: NodeId) -> ScrollOutcome {
        let Some(href) = self.anchors.get(&node) else {
            return ScrollOutcome::Ignored;
        };

        let target_id = &href[1..];
        if target_id.is_empty() {
            return ScrollOutcome::Suppressed;
        }

        match doc.get_element_by_id(target_id) {
            Some(target) => ScrollOutcome::ScrollTo(target),
            None => {
                tracing::debug!("No element for anchor {}", href);
                ScrollOutcome::Suppressed
            }
        }
    }
}
