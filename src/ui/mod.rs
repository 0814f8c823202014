//! Page interaction controllers
//!
//! Each concern keeps its state in one controller constructed at page init;
//! events reach them through [`crate::page::PageSession::dispatch`].

pub mod nav;
pub mod observer;
pub mod scroll;

pub use nav::NavigationController;
pub use observer::{
    AnimationState, Intersection, ObserverOptions, Rect, Viewport, VisibilityObserver,
    FADE_IN_CLASS, VISIBLE_CLASS,
};
pub use scroll::{ScrollOutcome, SmoothScrollController};
