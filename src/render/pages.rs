//! Home, about and contact pages

use super::{set_html, set_text};
use crate::content::{AboutContent, ContactContent, HomeContent};
use crate::dom::{Document, Fragment};

pub(super) fn render_home(doc: &mut Document, home: &HomeContent) {
    set_html(doc, "hero-title", home.hero_title.as_deref());
    set_text(doc, "hero-subtitle", home.hero_subtitle.as_deref());
    set_text(doc, "hero-cta", home.cta_button.as_deref());
}

pub(super) fn render_about(doc: &mut Document, about: &AboutContent) {
    set_text(doc, "about-title", about.title.as_deref());

    let (Some(node), Some(paragraphs)) =
        (doc.get_element_by_id("about-text"), &about.content_paragraphs)
    else {
        return;
    };

    let mut fragments = Vec::with_capacity(paragraphs.len() * 2);
    for (i, paragraph) in paragraphs.iter().enumerate() {
        if i > 0 {
            fragments.push(Fragment::element("br"));
        }
        fragments.push(Fragment::element("p").child(Fragment::raw(paragraph.as_str())));
    }
    doc.replace_children(node, fragments);
}

pub(super) fn render_contact(doc: &mut Document, contact: &ContactContent) {
    set_text(doc, "contact-title", contact.title.as_deref());
}
