//! Check content documents and page markup

use anyhow::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::dom::Document;
use crate::Folio;

/// Element ids the renderer writes into
pub const INSERTION_POINTS: &[&str] = &[
    "hero-title",
    "hero-subtitle",
    "hero-cta",
    "about-title",
    "about-text",
    "awards-title",
    "awards-grid",
    "contact-title",
    "articles-title",
    "article-list",
    "article-content",
    "footer-rights",
    "year",
];

/// Report which content documents load and what each page can receive
pub async fn run(folio: &Folio) -> Result<()> {
    let loader = folio.content_loader()?;
    let results = loader.load_all().await;

    println!(
        "Content ({:?}, {}):",
        loader.strategy(),
        describe_source(folio)
    );
    let mut missing = 0;
    for (section, content) in &results {
        let status = if content.is_some() { "ok" } else { "missing" };
        if content.is_none() {
            missing += 1;
        }
        println!("  {:<10} {}", section.name(), status);
    }

    let pages = scan_pages(&folio.pages_dir)?;
    println!("Pages ({}):", pages.len());
    for (name, points) in &pages {
        if points.is_empty() {
            println!("  {} (no insertion points)", name);
        } else {
            println!("  {} -> {}", name, points.join(", "));
        }
    }

    if missing > 0 {
        tracing::warn!("{} content document(s) could not be loaded", missing);
    }
    Ok(())
}

fn describe_source(folio: &Folio) -> String {
    folio.content_source.locate("")
}

/// Insertion points present in each HTML page under `pages_dir`
pub fn scan_pages(pages_dir: &Path) -> Result<Vec<(String, Vec<&'static str>)>> {
    if !pages_dir.exists() {
        return Ok(Vec::new());
    }

    let mut pages = Vec::new();
    for entry in WalkDir::new(pages_dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        let is_html = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e == "html" || e == "htm")
            .unwrap_or(false);
        if !path.is_file() || !is_html {
            continue;
        }

        let html = match fs::read_to_string(path) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to read page {:?}: {}", path, e);
                continue;
            }
        };
        let doc = Document::parse(&html);
        let points = INSERTION_POINTS
            .iter()
            .copied()
            .filter(|id| doc.get_element_by_id(id).is_some())
            .collect();

        let name = path
            .strip_prefix(pages_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();
        pages.push((name, points));
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::init::init_site;
    use tempfile::tempdir;

    #[test]
    fn test_scan_scaffolded_pages() {
        let dir = tempdir().unwrap();
        init_site(dir.path()).unwrap();
        fs::write(dir.path().join("pages/notes.txt"), "ignored").unwrap();

        let pages = scan_pages(&dir.path().join("pages")).unwrap();
        assert_eq!(pages.len(), 6);

        let (name, points) = &pages[0];
        assert_eq!(name, "about.html");
        assert!(points.contains(&"about-text"));
        assert!(points.contains(&"footer-rights"));
        assert!(!points.contains(&"awards-grid"));
    }

    #[test]
    fn test_scan_missing_dir() {
        let dir = tempdir().unwrap();
        assert!(scan_pages(&dir.path().join("nope")).unwrap().is_empty());
    }
}
