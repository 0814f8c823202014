//! List site content

use anyhow::Result;

use crate::content::{Section, SectionContent};
use crate::helpers::{strip_html, truncate};
use crate::Folio;

/// List site content by type
pub async fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let section = match content_type {
        "article" | "articles" => Section::Articles,
        "award" | "awards" => Section::Awards,
        "nav" | "navigation" => Section::Global,
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: articles, awards, nav",
                content_type
            );
        }
    };

    let loader = folio.content_loader()?;
    let Some(content) = loader.load_section(section).await else {
        anyhow::bail!("Could not load the {} content", section);
    };

    for line in describe(&content) {
        println!("{}", line);
    }

    Ok(())
}

/// Printable summary of a section
fn describe(content: &SectionContent) -> Vec<String> {
    let mut lines = Vec::new();
    match content {
        SectionContent::Articles(articles) => {
            lines.push(format!("Articles ({}):", articles.len()));
            for article in articles {
                lines.push(format!(
                    "  {} - {} [{}]",
                    article.date,
                    strip_html(&article.title),
                    article.id
                ));
                if !article.summary.is_empty() {
                    lines.push(format!(
                        "      {}",
                        truncate(&strip_html(&article.summary), 72, None)
                    ));
                }
            }
        }
        SectionContent::Awards(awards) => {
            let list = awards.awards.as_deref().unwrap_or_default();
            lines.push(format!("Awards ({}):", list.len()));
            for award in list {
                lines.push(format!("  {}", strip_html(&award.title)));
            }
        }
        SectionContent::Global(global) => {
            lines.push(format!("Navigation ({}):", global.nav.len()));
            for entry in &global.nav {
                lines.push(format!("  {} -> {}", entry.label, entry.url));
            }
        }
        other => lines.push(format!("{} content loaded", other.section())),
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Article, Award, AwardsContent};

    #[test]
    fn test_describe_articles() {
        let lines = describe(&SectionContent::Articles(vec![Article {
            id: "a1".to_string(),
            title: "On <em>Things</em>".to_string(),
            date: "2026-02-02".to_string(),
            summary: "Short.".to_string(),
            ..Default::default()
        }]));
        assert_eq!(
            lines,
            vec!["Articles (1):", "  2026-02-02 - On Things [a1]", "      Short."]
        );
    }

    #[test]
    fn test_describe_awards() {
        let lines = describe(&SectionContent::Awards(AwardsContent {
            title: None,
            awards: Some(vec![Award {
                title: "Prize".to_string(),
                description: String::new(),
            }]),
        }));
        assert_eq!(lines, vec!["Awards (1):", "  Prize"]);
    }
}
