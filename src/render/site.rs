//! Navigation, footer and list titles

use super::{set_text, Rendered};
use crate::content::{GlobalContent, NavEntry};
use crate::dom::{Document, Fragment, NodeId};
use crate::ui::nav::MENU_CLASS;

pub(super) fn render_global(doc: &mut Document, global: &GlobalContent) -> Rendered {
    set_text(doc, "footer-rights", global.footer_rights.as_deref());
    set_text(doc, "articles-title", global.titles.articles.as_deref());
    set_text(doc, "awards-title", global.titles.awards.as_deref());

    Rendered {
        fade_in: Vec::new(),
        nav_links: rebuild_nav(doc, &global.nav),
    }
}

/// Replace every navigation container's links; an empty list keeps the
/// static markup
fn rebuild_nav(doc: &mut Document, entries: &[NavEntry]) -> Vec<NodeId> {
    if entries.is_empty() {
        return Vec::new();
    }

    let mut links = Vec::new();
    for container in doc.query_class(MENU_CLASS) {
        let items = doc.replace_children(container, entries.iter().map(nav_item));
        for item in items {
            links.extend(doc.query_tag_within(item, "a"));
        }
    }
    links
}

fn nav_item(entry: &NavEntry) -> Fragment {
    Fragment::element("li").child(
        Fragment::element("a")
            .attr("href", &entry.url)
            .child(Fragment::text(entry.label.as_str())),
    )
}
