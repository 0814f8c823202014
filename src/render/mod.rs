//! Page renderer - writes content documents into the page
//!
//! Every write is gated twice: the insertion point must exist in the page
//! and the document must carry the field. A miss on either side leaves the
//! page's static markup untouched.
//!
//! Trust boundary: hero titles, about paragraphs, award and article text are
//! inserted as markup without escaping so authors can format them. The
//! content documents must therefore come from the site operator, never from
//! user submissions.

mod articles;
mod awards;
mod pages;
mod site;

use crate::config::{LabelsConfig, SiteConfig};
use crate::content::SectionContent;
use crate::dom::{Document, Fragment, NodeId};
use crate::ui::FADE_IN_CLASS;

/// Class of the element shown in place of an empty list
pub const EMPTY_STATE_CLASS: &str = "empty-state";

/// Nodes a render pass created that other controllers must know about
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    /// Fade-in elements to register with the visibility observer
    pub fade_in: Vec<NodeId>,
    /// Generated navigation links that close the mobile menu
    pub nav_links: Vec<NodeId>,
}

impl Rendered {
    fn with_fade_in(fade_in: Vec<NodeId>) -> Self {
        Self {
            fade_in,
            nav_links: Vec::new(),
        }
    }
}

/// Maps content documents onto the page's insertion points
#[derive(Debug, Clone)]
pub struct PageRenderer {
    labels: LabelsConfig,
    detail_page: String,
}

impl PageRenderer {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            labels: config.labels.clone(),
            detail_page: config.detail_page.clone(),
        }
    }

    /// Render one section.
    ///
    /// `article_id` is the `id` query parameter of the current page, used by
    /// the article detail view.
    pub fn render(
        &self,
        doc: &mut Document,
        content: &SectionContent,
        article_id: Option<&str>,
    ) -> Rendered {
        match content {
            SectionContent::Global(global) => site::render_global(doc, global),
            SectionContent::Home(home) => {
                pages::render_home(doc, home);
                Rendered::default()
            }
            SectionContent::About(about) => {
                pages::render_about(doc, about);
                Rendered::default()
            }
            SectionContent::Awards(awards) => awards::render_awards(doc, awards, &self.labels),
            SectionContent::Contact(contact) => {
                pages::render_contact(doc, contact);
                Rendered::default()
            }
            SectionContent::Articles(list) => {
                let mut rendered =
                    articles::render_article_list(doc, list, &self.detail_page, &self.labels);
                let detail = articles::render_article_detail(doc, list, article_id, &self.labels);
                rendered.fade_in.extend(detail.fade_in);
                rendered
            }
        }
    }
}

/// Write plain text into `#id` when both element and value exist
fn set_text(doc: &mut Document, id: &str, value: Option<&str>) -> bool {
    match (doc.get_element_by_id(id), value) {
        (Some(node), Some(text)) => {
            doc.set_text_content(node, text);
            true
        }
        _ => false,
    }
}

/// Write trusted markup into `#id` when both element and value exist
fn set_html(doc: &mut Document, id: &str, value: Option<&str>) -> bool {
    match (doc.get_element_by_id(id), value) {
        (Some(node), Some(html)) => {
            doc.set_inner_html(node, html);
            true
        }
        _ => false,
    }
}

/// Placeholder shown instead of an empty list
fn empty_state(text: &str) -> Fragment {
    Fragment::element("p")
        .class(EMPTY_STATE_CLASS)
        .child(Fragment::text(text))
}

/// Fade-in elements among `roots` and their descendants
fn fade_in_nodes(doc: &Document, roots: &[NodeId]) -> Vec<NodeId> {
    roots
        .iter()
        .flat_map(|&root| {
            let own = doc.has_class(root, FADE_IN_CLASS).then_some(root);
            own.into_iter()
                .chain(doc.query_class_within(root, FADE_IN_CLASS))
        })
        .collect()
}
