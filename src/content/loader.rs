//! Content loader - fetches the site's content documents

use serde::Deserialize;
use tokio::task::JoinSet;

use super::fetcher::ContentFetcher;
use super::model::{
    AboutContent, Article, Award, AwardsContent, ContactContent, GlobalContent, HomeContent,
    NavEntry,
};
use crate::config::FetchStrategy;
use crate::helpers::join_url;

/// A logical part of the site fed by one content document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    Global,
    Home,
    About,
    Awards,
    Contact,
    Articles,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Global,
        Section::Home,
        Section::About,
        Section::Awards,
        Section::Contact,
        Section::Articles,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Global => "global",
            Section::Home => "home",
            Section::About => "about",
            Section::Awards => "awards",
            Section::Contact => "contact",
            Section::Articles => "articles",
        }
    }

    /// Document path in the split layout
    pub fn path(&self, content_dir: &str) -> String {
        join_url(content_dir, &format!("{}.json", self.name()))
    }

    async fn fetch(self, fetcher: &ContentFetcher, content_dir: &str) -> Option<SectionContent> {
        let path = self.path(content_dir);
        match self {
            Section::Global => fetcher
                .fetch_document::<GlobalContent>(&path)
                .await
                .map(SectionContent::Global),
            Section::Home => fetcher
                .fetch_document::<HomeContent>(&path)
                .await
                .map(SectionContent::Home),
            Section::About => fetcher
                .fetch_document::<AboutContent>(&path)
                .await
                .map(SectionContent::About),
            Section::Awards => fetcher
                .fetch_document::<Vec<Award>>(&path)
                .await
                .map(|awards| {
                    SectionContent::Awards(AwardsContent {
                        title: None,
                        awards: Some(awards),
                    })
                }),
            Section::Contact => fetcher
                .fetch_document::<ContactContent>(&path)
                .await
                .map(SectionContent::Contact),
            Section::Articles => fetcher
                .fetch_document::<Vec<Article>>(&path)
                .await
                .map(SectionContent::Articles),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed payload of one section
#[derive(Debug, Clone, PartialEq)]
pub enum SectionContent {
    Global(GlobalContent),
    Home(HomeContent),
    About(AboutContent),
    Awards(AwardsContent),
    Contact(ContactContent),
    Articles(Vec<Article>),
}

impl SectionContent {
    pub fn section(&self) -> Section {
        match self {
            SectionContent::Global(_) => Section::Global,
            SectionContent::Home(_) => Section::Home,
            SectionContent::About(_) => Section::About,
            SectionContent::Awards(_) => Section::Awards,
            SectionContent::Contact(_) => Section::Contact,
            SectionContent::Articles(_) => Section::Articles,
        }
    }
}

/// Page links whose labels the combined document supplies, in menu order
const COMBINED_NAV_PAGES: [&str; 5] = [
    "index.html",
    "about.html",
    "articles.html",
    "awards.html",
    "contact.html",
];

/// The single document used by the monolithic strategy
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CombinedDocument {
    pub common: Option<CommonContent>,
    pub home: Option<HomeContent>,
    pub about: Option<AboutContent>,
    pub awards: Option<CombinedAwards>,
    pub contact: Option<ContactContent>,
    pub articles: Option<Vec<Article>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommonContent {
    pub nav: Option<CommonNav>,
    pub footer_rights: Option<String>,
}

/// Labels keyed by page
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CommonNav {
    pub home: Option<String>,
    pub about: Option<String>,
    pub articles: Option<String>,
    pub awards: Option<String>,
    pub contact: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CombinedAwards {
    pub title: Option<String>,
    pub awards_list: Option<Vec<Award>>,
}

impl CommonNav {
    /// Ordered navigation entries for the labels that are present
    fn into_entries(self) -> Vec<NavEntry> {
        let labels = [self.home, self.about, self.articles, self.awards, self.contact];
        COMBINED_NAV_PAGES
            .iter()
            .zip(labels)
            .filter_map(|(url, label)| {
                label.map(|label| NavEntry {
                    url: url.to_string(),
                    label,
                })
            })
            .collect()
    }
}

impl CombinedDocument {
    /// Split into per-section payloads
    pub fn into_sections(self) -> Vec<SectionContent> {
        let mut sections = Vec::new();

        if let Some(common) = self.common {
            sections.push(SectionContent::Global(GlobalContent {
                footer_rights: common.footer_rights,
                titles: Default::default(),
                nav: common.nav.map(CommonNav::into_entries).unwrap_or_default(),
            }));
        }
        if let Some(home) = self.home {
            sections.push(SectionContent::Home(home));
        }
        if let Some(about) = self.about {
            sections.push(SectionContent::About(about));
        }
        if let Some(awards) = self.awards {
            sections.push(SectionContent::Awards(AwardsContent {
                title: awards.title,
                awards: awards.awards_list,
            }));
        }
        if let Some(contact) = self.contact {
            sections.push(SectionContent::Contact(contact));
        }
        if let Some(articles) = self.articles {
            sections.push(SectionContent::Articles(articles));
        }

        sections
    }
}

/// Loads content documents with the configured strategy
#[derive(Debug, Clone)]
pub struct ContentLoader {
    fetcher: ContentFetcher,
    strategy: FetchStrategy,
    content_dir: String,
    data_file: String,
}

impl ContentLoader {
    /// Create a new content loader
    pub fn new(
        fetcher: ContentFetcher,
        strategy: FetchStrategy,
        content_dir: &str,
        data_file: &str,
    ) -> Self {
        Self {
            fetcher,
            strategy,
            content_dir: content_dir.to_string(),
            data_file: data_file.to_string(),
        }
    }

    pub fn strategy(&self) -> FetchStrategy {
        self.strategy
    }

    /// Start one independent fetch per section.
    ///
    /// Results come out of the set in completion order; a failed or slow
    /// section never holds up the others.
    pub fn spawn_split(&self) -> JoinSet<(Section, Option<SectionContent>)> {
        let mut tasks = JoinSet::new();
        for section in Section::ALL {
            let fetcher = self.fetcher.clone();
            let content_dir = self.content_dir.clone();
            tasks.spawn(async move {
                let content = section.fetch(&fetcher, &content_dir).await;
                (section, content)
            });
        }
        tasks
    }

    /// Fetch the combined document; `None` means nothing renders
    pub async fn load_monolithic(&self) -> Option<Vec<SectionContent>> {
        self.fetcher
            .fetch_document::<CombinedDocument>(&self.data_file)
            .await
            .map(CombinedDocument::into_sections)
    }

    /// Load every section, ordered by section
    pub async fn load_all(&self) -> Vec<(Section, Option<SectionContent>)> {
        let mut results = match self.strategy {
            FetchStrategy::Split => {
                let mut results = Vec::new();
                let mut tasks = self.spawn_split();
                while let Some(joined) = tasks.join_next().await {
                    match joined {
                        Ok(result) => results.push(result),
                        Err(e) => tracing::warn!("Content task failed: {}", e),
                    }
                }
                results
            }
            FetchStrategy::Monolithic => {
                let mut loaded = self.load_monolithic().await.unwrap_or_default();
                Section::ALL
                    .iter()
                    .map(|&section| {
                        let content = loaded
                            .iter()
                            .position(|c| c.section() == section)
                            .map(|i| loaded.swap_remove(i));
                        (section, content)
                    })
                    .collect()
            }
        };
        results.sort_by_key(|(section, _)| *section);
        results
    }

    /// Load one section on its own
    pub async fn load_section(&self, section: Section) -> Option<SectionContent> {
        match self.strategy {
            FetchStrategy::Split => section.fetch(&self.fetcher, &self.content_dir).await,
            FetchStrategy::Monolithic => self
                .load_monolithic()
                .await?
                .into_iter()
                .find(|c| c.section() == section),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentSource;
    use std::fs;
    use tempfile::tempdir;

    fn loader(dir: &std::path::Path, strategy: FetchStrategy) -> ContentLoader {
        let fetcher = ContentFetcher::new(ContentSource::Dir(dir.to_path_buf()), None).unwrap();
        ContentLoader::new(fetcher, strategy, "content", "data.json")
    }

    #[test]
    fn test_section_paths() {
        assert_eq!(Section::Global.path("content"), "content/global.json");
        assert_eq!(Section::Articles.path("content/"), "content/articles.json");
    }

    #[test]
    fn test_combined_nav_order() {
        let json = r#"{"common": {"nav": {"contact": "Contact", "home": "Home"}, "footer_rights": "R"}}"#;
        let doc: CombinedDocument = serde_json::from_str(json).unwrap();
        let sections = doc.into_sections();
        let SectionContent::Global(global) = &sections[0] else {
            panic!("expected global section");
        };
        let urls: Vec<_> = global.nav.iter().map(|e| e.url.as_str()).collect();
        assert_eq!(urls, vec!["index.html", "contact.html"]);
        assert_eq!(global.footer_rights.as_deref(), Some("R"));
    }

    #[tokio::test]
    async fn test_split_failure_is_isolated() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("home.json"), r#"{"hero_subtitle": "Hi"}"#).unwrap();
        fs::write(content.join("awards.json"), "[]").unwrap();
        fs::write(content.join("about.json"), "{ broken").unwrap();

        let results = loader(dir.path(), FetchStrategy::Split).load_all().await;
        assert_eq!(results.len(), 6);

        let loaded: Vec<_> = results
            .iter()
            .filter(|(_, c)| c.is_some())
            .map(|(s, _)| *s)
            .collect();
        assert_eq!(loaded, vec![Section::Home, Section::Awards]);
    }

    #[tokio::test]
    async fn test_monolithic_failure_loads_nothing() {
        let dir = tempdir().unwrap();
        let results = loader(dir.path(), FetchStrategy::Monolithic).load_all().await;
        assert!(results.iter().all(|(_, c)| c.is_none()));
    }

    #[tokio::test]
    async fn test_monolithic_sections() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("data.json"),
            r#"{
                "awards": {"title": "Honors", "awards_list": [{"title": "X", "description": "Y"}]},
                "articles": []
            }"#,
        )
        .unwrap();

        let loader = loader(dir.path(), FetchStrategy::Monolithic);
        match loader.load_section(Section::Awards).await {
            Some(SectionContent::Awards(awards)) => {
                assert_eq!(awards.title.as_deref(), Some("Honors"));
                assert_eq!(awards.awards.unwrap().len(), 1);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(loader.load_section(Section::Home).await.is_none());
        assert_eq!(
            loader.load_section(Section::Articles).await,
            Some(SectionContent::Articles(Vec::new()))
        );
    }
}
