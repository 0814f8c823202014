//! One-shot scroll-triggered fade-in
//!
//! Elements are registered as pending and flip to visible the first time
//! enough of them enters the (margin-adjusted) viewport. The transition is
//! one-way: a visible element is dropped from the watch set and can never be
//! registered again.

use std::collections::{BTreeSet, HashSet};

use crate::config::ObserverConfig;
use crate::dom::{Document, NodeId};

/// Marks an element as taking part in the fade-in animation
pub const FADE_IN_CLASS: &str = "fade-in";
/// Added once the element has been revealed
pub const VISIBLE_CLASS: &str = "visible";

/// Axis-aligned rectangle in viewport coordinates (px)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    fn right(&self) -> f64 {
        self.x + self.width
    }

    fn bottom(&self) -> f64 {
        self.y + self.height
    }

    fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }
}

/// The visible area of the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Observer tuning
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the target
    pub threshold: f64,
    /// Margins added to the viewport edges; negative values shrink it
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            margin_top: 0.0,
            margin_right: 0.0,
            margin_bottom: -50.0,
            margin_left: 0.0,
        }
    }
}

impl From<&ObserverConfig> for ObserverOptions {
    fn from(config: &ObserverConfig) -> Self {
        Self {
            threshold: config.threshold,
            margin_top: config.root_margin.top,
            margin_right: config.root_margin.right,
            margin_bottom: config.root_margin.bottom,
            margin_left: config.root_margin.left,
        }
    }
}

impl ObserverOptions {
    /// The viewport expanded (or shrunk) by the root margins
    pub fn root(&self, viewport: Viewport) -> Rect {
        let x = -self.margin_left;
        let y = -self.margin_top;
        Rect::new(
            x,
            y,
            viewport.width + self.margin_right - x,
            viewport.height + self.margin_bottom - y,
        )
    }

    /// Fraction of `target` inside the margin-adjusted viewport.
    ///
    /// Zero-area targets count as fully visible when they touch the root.
    pub fn intersection_ratio(&self, target: Rect, viewport: Viewport) -> f64 {
        let root = self.root(viewport);
        let left = target.x.max(root.x);
        let top = target.y.max(root.y);
        let right = target.right().min(root.right());
        let bottom = target.bottom().min(root.bottom());

        if right < left || bottom < top {
            return 0.0;
        }

        let target_area = target.area();
        if target_area == 0.0 {
            return 1.0;
        }
        ((right - left) * (bottom - top) / target_area).min(1.0)
    }

    /// Whether `target` is visible enough to be revealed
    pub fn qualifies(&self, target: Rect, viewport: Viewport) -> bool {
        let root = self.root(viewport);
        let touches = target.x <= root.right()
            && target.right() >= root.x
            && target.y <= root.bottom()
            && target.bottom() >= root.y;
        touches && self.intersection_ratio(target, viewport) >= self.threshold
    }
}

/// Animation state of a registered element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Pending,
    Visible,
}

/// One element's geometry at the time of an intersection check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub node: NodeId,
    pub rect: Rect,
    pub viewport: Viewport,
}

/// Watches pending fade-in elements
#[derive(Debug, Clone, Default)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    pending: BTreeSet<NodeId>,
    revealed: HashSet<NodeId>,
}

impl VisibilityObserver {
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            pending: BTreeSet::new(),
            revealed: HashSet::new(),
        }
    }

    /// Start watching `node`; returns false if it is already watched or
    /// has already been revealed
    pub fn observe(&mut self, node: NodeId) -> bool {
        if self.revealed.contains(&node) {
            return false;
        }
        self.pending.insert(node)
    }

    /// Mark every element carrying one of `classes` as a fade-in element and
    /// watch it; returns the newly watched nodes
    pub fn observe_static(&mut self, doc: &mut Document, classes: &[String]) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = classes
            .iter()
            .flat_map(|class| doc.query_class(class))
            .collect();
        nodes.sort_unstable();
        nodes.dedup();

        nodes
            .into_iter()
            .filter(|&node| {
                doc.add_class(node, FADE_IN_CLASS);
                self.observe(node)
            })
            .collect()
    }

    pub fn state(&self, node: NodeId) -> Option<AnimationState> {
        if self.revealed.contains(&node) {
            Some(AnimationState::Visible)
        } else if self.pending.contains(&node) {
            Some(AnimationState::Pending)
        } else {
            None
        }
    }

    pub fn is_watching(&self, node: NodeId) -> bool {
        self.pending.contains(&node)
    }

    /// Pending nodes in document-id order
    pub fn watched(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.pending.iter().copied()
    }

    /// Stop watching nodes that are no longer in the document; returns how
    /// many were dropped
    pub fn prune(&mut self, doc: &Document) -> usize {
        let before = self.pending.len();
        self.pending.retain(|&node| doc.is_attached(node));
        before - self.pending.len()
    }

    /// Deliver intersection results; returns the nodes revealed by this call.
    ///
    /// Entries for unwatched, detached or already visible elements are
    /// ignored, so redelivering the same entries is a no-op.
    pub fn on_intersections(
        &mut self,
        doc: &mut Document,
        entries: &[Intersection],
    ) -> Vec<NodeId> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !self.pending.contains(&entry.node) {
                continue;
            }
            if !doc.is_attached(entry.node) {
                self.pending.remove(&entry.node);
                continue;
            }
            if !self.options.qualifies(entry.rect, entry.viewport) {
                continue;
            }
            self.pending.remove(&entry.node);
            self.revealed.insert(entry.node);
            doc.add_class(entry.node, VISIBLE_CLASS);
            revealed.push(entry.node);
        }
        revealed
    }
}
