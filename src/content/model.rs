//! Content document models
//!
//! Every field is optional or defaulted: documents carry no schema and the
//! renderer checks presence before using anything.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Site-wide content (`content/global.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalContent {
    pub footer_rights: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub titles: Titles,
    #[serde(deserialize_with = "null_as_default")]
    pub nav: Vec<NavEntry>,
}

/// Section titles for list pages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Titles {
    pub articles: Option<String>,
    pub awards: Option<String>,
}

/// One navigation link
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub label: String,
}

/// Home page hero (`content/home.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    /// Trusted markup
    pub hero_title: Option<String>,
    pub hero_subtitle: Option<String>,
    pub cta_button: Option<String>,
}

/// About page (`content/about.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub title: Option<String>,
    /// Trusted markup, one entry per paragraph
    pub content_paragraphs: Option<Vec<String>>,
}

/// One entry of `content/awards.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Award {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

/// Awards section; the split layout carries no title of its own
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AwardsContent {
    pub title: Option<String>,
    pub awards: Option<Vec<Award>>,
}

/// Contact page (`content/contact.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub title: Option<String>,
}

/// A published article
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Article {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub authors: String,
    #[serde(rename = "abstract", deserialize_with = "null_as_default")]
    pub summary: String,
    pub introduction: Option<String>,
    pub methods: Option<String>,
    pub results: Option<String>,
    pub discussion: Option<String>,
    pub conclusion: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub references: Vec<String>,
}

impl Article {
    /// Body text for a section, if present and not blank
    pub fn section(&self, section: ArticleSection) -> Option<&str> {
        let body = match section {
            ArticleSection::Introduction => &self.introduction,
            ArticleSection::Methods => &self.methods,
            ArticleSection::Results => &self.results,
            ArticleSection::Discussion => &self.discussion,
            ArticleSection::Conclusion => &self.conclusion,
        };
        body.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Optional body sections of an article, in rendering order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSection {
    Introduction,
    Methods,
    Results,
    Discussion,
    Conclusion,
}

impl ArticleSection {
    pub const ALL: [ArticleSection; 5] = [
        ArticleSection::Introduction,
        ArticleSection::Methods,
        ArticleSection::Results,
        ArticleSection::Discussion,
        ArticleSection::Conclusion,
    ];

    pub fn heading(&self) -> &'static str {
        match self {
            ArticleSection::Introduction => "Introduction",
            ArticleSection::Methods => "Methods",
            ArticleSection::Results => "Results",
            ArticleSection::Discussion => "Discussion",
            ArticleSection::Conclusion => "Conclusion",
        }
    }
}
