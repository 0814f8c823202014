//! Awards grid

use super::{empty_state, fade_in_nodes, set_text, Rendered};
use crate::config::LabelsConfig;
use crate::content::{Award, AwardsContent};
use crate::dom::{Document, Fragment};
use crate::ui::FADE_IN_CLASS;

/// Class of one award card
pub const CARD_CLASS: &str = "project-card";

pub(super) fn render_awards(
    doc: &mut Document,
    content: &AwardsContent,
    labels: &LabelsConfig,
) -> Rendered {
    set_text(doc, "awards-title", content.title.as_deref());

    let Some(grid) = doc.get_element_by_id("awards-grid") else {
        return Rendered::default();
    };

    let awards = content.awards.as_deref().unwrap_or_default();
    let cards = if awards.is_empty() {
        vec![empty_state(&labels.no_awards)]
    } else {
        awards.iter().map(award_card).collect()
    };

    let inserted = doc.replace_children(grid, cards);
    Rendered::with_fade_in(fade_in_nodes(doc, &inserted))
}

fn award_card(award: &Award) -> Fragment {
    Fragment::element("div")
        .class(CARD_CLASS)
        .class(FADE_IN_CLASS)
        .child(
            Fragment::element("div")
                .class("project-info")
                .child(Fragment::element("h3").child(Fragment::raw(award.title.as_str())))
                .child(Fragment::element("p").child(Fragment::raw(award.description.as_str()))),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::EMPTY_STATE_CLASS;

    const PAGE: &str = r#"<html><body>
<h2 id="awards-title">Awards</h2>
<div id="awards-grid"><div class="project-card">Static card</div></div>
</body></html>"#;

    fn render(awards: Option<Vec<Award>>) -> (Document, Rendered) {
        let mut doc = Document::parse(PAGE);
        let content = AwardsContent {
            title: None,
            awards,
        };
        let rendered = render_awards(&mut doc, &content, &LabelsConfig::default());
        (doc, rendered)
    }

    #[test]
    fn test_empty_list_shows_placeholder_only() {
        for awards in [None, Some(Vec::new())] {
            let (doc, rendered) = render(awards);
            let grid = doc.get_element_by_id("awards-grid").unwrap();
            assert_eq!(doc.children(grid).len(), 1);
            assert_eq!(doc.query_class_within(grid, EMPTY_STATE_CLASS).len(), 1);
            assert!(doc.query_class_within(grid, CARD_CLASS).is_empty());
            assert_eq!(doc.text_content(grid), "No Honor & Rewards Published");
            assert!(rendered.fade_in.is_empty());
        }
    }

    #[test]
    fn test_single_award_card() {
        let (doc, rendered) = render(Some(vec![Award {
            title: "X".to_string(),
            description: "Y".to_string(),
        }]));
        let grid = doc.get_element_by_id("awards-grid").unwrap();
        let cards = doc.query_class_within(grid, CARD_CLASS);
        assert_eq!(cards.len(), 1);
        assert_eq!(rendered.fade_in, cards);

        let heading = doc.query_tag_within(cards[0], "h3");
        let body = doc.query_tag_within(cards[0], "p");
        assert_eq!(doc.text_content(heading[0]), "X");
        assert_eq!(doc.text_content(body[0]), "Y");
        assert!(doc.query_class_within(grid, EMPTY_STATE_CLASS).is_empty());
    }

    #[test]
    fn test_cards_in_input_order() {
        let awards = (1..=3)
            .map(|i| Award {
                title: format!("Award {}", i),
                description: String::new(),
            })
            .collect();
        let (doc, rendered) = render(Some(awards));
        let titles: Vec<_> = rendered
            .fade_in
            .iter()
            .map(|&card| doc.text_content(doc.query_tag_within(card, "h3")[0]))
            .collect();
        assert_eq!(titles, vec!["Award 1", "Award 2", "Award 3"]);
    }

    #[test]
    fn test_title_from_combined_document() {
        let mut doc = Document::parse(PAGE);
        let content = AwardsContent {
            title: Some("Honors".to_string()),
            awards: Some(Vec::new()),
        };
        render_awards(&mut doc, &content, &LabelsConfig::default());
        let title = doc.get_element_by_id("awards-title").unwrap();
        assert_eq!(doc.text_content(title), "Honors");
    }
}
