//! Article list and single article view

use super::{empty_state, fade_in_nodes, Rendered};
use crate::config::LabelsConfig;
use crate::content::{Article, ArticleSection};
use crate::dom::{Document, Fragment};
use crate::helpers::article_href;
use crate::ui::FADE_IN_CLASS;

/// Class of one article card in the list
pub const CARD_CLASS: &str = "article-card";
/// Class of each block in the article view
pub const SECTION_CLASS: &str = "article-section";

pub(super) fn render_article_list(
    doc: &mut Document,
    articles: &[Article],
    detail_page: &str,
    labels: &LabelsConfig,
) -> Rendered {
    let Some(list) = doc.get_element_by_id("article-list") else {
        return Rendered::default();
    };

    let cards = if articles.is_empty() {
        vec![empty_state(&labels.no_articles)]
    } else {
        articles
            .iter()
            .map(|article| article_card(article, detail_page, &labels.read_more))
            .collect()
    };

    let inserted = doc.replace_children(list, cards);
    Rendered::with_fade_in(fade_in_nodes(doc, &inserted))
}

fn article_card(article: &Article, detail_page: &str, read_more: &str) -> Fragment {
    Fragment::element("a")
        .attr("href", &article_href(detail_page, &article.id))
        .class(CARD_CLASS)
        .class(FADE_IN_CLASS)
        .child(Fragment::element("h3").child(Fragment::raw(article.title.as_str())))
        .child(
            Fragment::element("span")
                .class("article-meta")
                .child(Fragment::raw(format!("{} | {}", article.date, article.authors))),
        )
        .child(
            Fragment::element("div")
                .class("article-abstract")
                .child(Fragment::raw(article.summary.as_str())),
        )
        .child(
            Fragment::element("span")
                .class("read-more")
                .child(Fragment::raw(read_more)),
        )
}

pub(super) fn render_article_detail(
    doc: &mut Document,
    articles: &[Article],
    article_id: Option<&str>,
    labels: &LabelsConfig,
) -> Rendered {
    let Some(container) = doc.get_element_by_id("article-content") else {
        return Rendered::default();
    };

    let Some(id) = article_id.filter(|id| !id.is_empty()) else {
        doc.replace_children(container, [message(&labels.no_article_specified)]);
        return Rendered::default();
    };

    let Some(article) = articles.iter().find(|a| a.id == id) else {
        tracing::debug!("No article with id {:?}", id);
        doc.replace_children(container, [message(&labels.article_not_found)]);
        return Rendered::default();
    };

    let inserted = doc.replace_children(container, article_view(article));
    Rendered::with_fade_in(fade_in_nodes(doc, &inserted))
}

fn message(text: &str) -> Fragment {
    Fragment::element("p").child(Fragment::text(text))
}

/// Header, abstract, non-blank body sections, then references
fn article_view(article: &Article) -> Vec<Fragment> {
    let mut blocks = vec![article_header(article), section("Abstract", &article.summary)];

    for part in ArticleSection::ALL {
        if let Some(body) = article.section(part) {
            blocks.push(section(part.heading(), body));
        }
    }

    if !article.references.is_empty() {
        let items = article
            .references
            .iter()
            .map(|r| Fragment::element("li").child(Fragment::raw(r.as_str())));
        blocks.push(
            Fragment::element("section")
                .class(SECTION_CLASS)
                .class(FADE_IN_CLASS)
                .child(Fragment::element("h2").child(Fragment::text("References")))
                .child(
                    Fragment::element("ol")
                        .class("reference-list")
                        .children(items),
                ),
        );
    }

    blocks
}

fn article_header(article: &Article) -> Fragment {
    let meta_line = |label: &str, value: &str| {
        Fragment::element("p")
            .child(Fragment::element("strong").child(Fragment::text(label)))
            .child(Fragment::raw(format!(" {}", value)))
    };

    Fragment::element("header")
        .class("article-header")
        .class(FADE_IN_CLASS)
        .child(Fragment::element("h1").child(Fragment::raw(article.title.as_str())))
        .child(
            Fragment::element("div")
                .class("article-meta")
                .child(meta_line("Authors:", &article.authors))
                .child(meta_line("Published:", &article.date)),
        )
}

fn section(heading: &str, body: &str) -> Fragment {
    Fragment::element("section")
        .class(SECTION_CLASS)
        .class(FADE_IN_CLASS)
        .child(Fragment::element("h2").child(Fragment::text(heading)))
        .child(Fragment::element("p").child(Fragment::raw(body)))
}
