//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Content
    /// Directory path or http(s) base URL the content documents live under
    pub content_source: String,
    /// Directory (relative to the source) holding the per-section documents
    pub content_dir: String,
    /// Combined document used by the monolithic strategy
    pub data_file: String,
    pub fetch_strategy: FetchStrategy,
    /// Request timeout in seconds; unset means requests may hang forever
    pub fetch_timeout: Option<u64>,

    // Pages
    pub pages_dir: String,
    pub detail_page: String,

    // Footer
    pub start_year: i32,

    // Animation
    pub animate: Vec<String>,
    #[serde(default)]
    pub observer: ObserverConfig,

    #[serde(default)]
    pub labels: LabelsConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),

            content_source: ".".to_string(),
            content_dir: "content".to_string(),
            data_file: "data.json".to_string(),
            fetch_strategy: FetchStrategy::default(),
            fetch_timeout: None,

            pages_dir: "pages".to_string(),
            detail_page: "article-view.html".to_string(),

            start_year: 2026,

            animate: [
                "hero-text",
                "hero-image",
                "section-title",
                "about-grid",
                "project-card",
                "contact-form",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            observer: ObserverConfig::default(),

            labels: LabelsConfig::default(),
            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// How content documents are retrieved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchStrategy {
    /// One document per section, fetched concurrently
    #[default]
    Split,
    /// A single document holding every section
    Monolithic,
}

/// Scroll animation observer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub threshold: f64,
    #[serde(default)]
    pub root_margin: RootMarginConfig,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: RootMarginConfig::default(),
        }
    }
}

/// Margins (px) applied to the viewport before intersection tests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RootMarginConfig {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for RootMarginConfig {
    fn default() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: -50.0,
            left: 0.0,
        }
    }
}

/// Fixed texts shown when content is missing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub no_awards: String,
    pub no_articles: String,
    pub article_not_found: String,
    pub no_article_specified: String,
    /// Trusted markup, emitted as-is
    pub read_more: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            no_awards: "No Honor & Rewards Published".to_string(),
            no_articles: "No Articles Published".to_string(),
            article_not_found: "Article not found.".to_string(),
            no_article_specified: "No article specified.".to_string(),
            read_more: "Read Full Article &rarr;".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.fetch_strategy, FetchStrategy::Split);
        assert_eq!(config.start_year, 2026);
        assert_eq!(config.observer.threshold, 0.1);
        assert_eq!(config.observer.root_margin.bottom, -50.0);
        assert_eq!(config.animate.len(), 6);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Dr. Example
content_source: https://cdn.example.com/site
fetch_strategy: monolithic
fetch_timeout: 15
observer:
  threshold: 0.25
labels:
  no_awards: Nothing yet
analytics_id: abc
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Dr. Example");
        assert_eq!(config.fetch_strategy, FetchStrategy::Monolithic);
        assert_eq!(config.fetch_timeout, Some(15));
        assert_eq!(config.observer.threshold, 0.25);
        assert_eq!(config.observer.root_margin.bottom, -50.0);
        assert_eq!(config.labels.no_awards, "Nothing yet");
        assert_eq!(config.labels.article_not_found, "Article not found.");
        assert!(config.extra.contains_key("analytics_id"));
    }
}
