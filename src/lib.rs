//! folio: headless runtime for JSON-driven personal and academic sites
//!
//! A site is a set of static HTML pages plus content documents (JSON) that
//! fill them in: hero text, about paragraphs, awards, articles. This crate
//! loads a page, attaches its navigation, smooth-scroll and fade-in
//! controllers, fetches the content and renders it into the page.

pub mod commands;
pub mod config;
pub mod content;
pub mod dom;
pub mod helpers;
pub mod page;
pub mod render;
pub mod ui;

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;

use content::{ContentFetcher, ContentLoader, ContentSource};
use dom::Document;
use page::PageSession;

/// The main Folio application
#[derive(Debug, Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Page markup directory
    pub pages_dir: std::path::PathBuf,
    /// Where content documents are fetched from
    pub content_source: ContentSource,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)
                .with_context(|| format!("Failed to load {:?}", config_path))?
        } else {
            config::SiteConfig::default()
        };

        let pages_dir = base_dir.join(&config.pages_dir);
        let content_source = ContentSource::parse(&config.content_source, &base_dir);

        Ok(Self {
            config,
            base_dir,
            pages_dir,
            content_source,
        })
    }

    /// Build a content loader for the configured source and strategy
    pub fn content_loader(&self) -> Result<ContentLoader> {
        let fetcher = ContentFetcher::new(
            self.content_source.clone(),
            self.config.fetch_timeout.map(Duration::from_secs),
        )?;
        Ok(ContentLoader::new(
            fetcher,
            self.config.fetch_strategy,
            &self.config.content_dir,
            &self.config.data_file,
        ))
    }

    /// Parse a page from the pages directory and attach its controllers
    pub fn open_page(&self, page: &str, query: &str) -> Result<PageSession> {
        let path = self.pages_dir.join(page);
        let html = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read page {:?}", path))?;
        Ok(PageSession::init(Document::parse(&html), &self.config, query))
    }

    /// Load a page, fetch its content and return the resulting markup
    pub async fn render_page(&self, page: &str, query: &str) -> Result<String> {
        let mut session = self.open_page(page, query)?;
        let loader = self.content_loader()?;
        session.load(&loader).await;
        Ok(session.to_html())
    }
}
