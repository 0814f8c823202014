//! Helper functions shared by the renderer, the session and the commands

mod date;
mod html;
mod url;

pub use date::*;
pub use html::*;
pub use url::*;
