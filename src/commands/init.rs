//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;


const CONFIG: &str = r#"# Folio Configuration

# Site
title: My Research Site

# Content
## A directory (relative to this file) or an http(s) base URL
content_source: .
content_dir: content
data_file: data.json
## split: one document per section, fetched concurrently
## monolithic: a single data.json holding every section
fetch_strategy: split
## Seconds before a content request is abandoned (unset: wait forever)
# fetch_timeout: 30

# Pages
pages_dir: pages
detail_page: article-view.html

# Footer
start_year: 2026

# Scroll animations
animate:
  - hero-text
  - hero-image
  - section-title
  - about-grid
  - project-card
  - contact-form
observer:
  threshold: 0.1
  root_margin:
    bottom: -50

labels:
  no_awards: "No Honor & Rewards Published"
  no_articles: No Articles Published
"#;

const GLOBAL_JSON: &str = r#"{
  "footer_rights": "All rights reserved.",
  "titles": {
    "articles": "Articles",
    "awards": "Honor & Rewards"
  },
  "nav": [
    { "url": "index.html", "label": "Home" },
    { "url": "about.html", "label": "About" },
    { "url": "articles.html", "label": "Articles" },
    { "url": "awards.html", "label": "Awards" },
    { "url": "contact.html", "label": "Contact" }
  ]
}
"#;

const HOME_JSON: &str = r#"{
  "hero_title": "Hi, I'm <span class=\"highlight\">John Doe</span>",
  "hero_subtitle": "Researcher and engineer.",
  "cta_button": "Get in touch"
}
"#;

const ABOUT_JSON: &str = r#"{
  "title": "About Me",
  "content_paragraphs": [
    "I work on <strong>distributed systems</strong>.",
    "Outside research I teach and write."
  ]
}
"#;

const AWARDS_JSON: &str = r#"[
  { "title": "Best Paper Award", "description": "Awarded for outstanding work." }
]
"#;

const CONTACT_JSON: &str = r#"{
  "title": "Contact"
}
"#;

const ARTICLES_JSON: &str = r#"[
  {
    "id": "hello-world",
    "title": "Hello World",
    "date": "2026-01-01",
    "authors": "John Doe",
    "abstract": "A first article.",
    "introduction": "Why this site exists.",
    "methods": "",
    "results": "",
    "discussion": "",
    "conclusion": "More to come.",
    "references": []
  }
]
"#;

/// Page files and the body markup each one carries
const PAGES: &[(&str, &str)] = &[
    (
        "index.html",
        r##"<section class="hero">
  <div class="hero-text">
    <h1 id="hero-title">Welcome</h1>
    <p id="hero-subtitle"></p>
    <a id="hero-cta" class="btn" href="#contact">Contact</a>
  </div>
</section>"##,
    ),
    (
        "about.html",
        r#"<section class="about">
  <h2 id="about-title" class="section-title">About</h2>
  <div class="about-grid"><div id="about-text"></div></div>
</section>"#,
    ),
    (
        "awards.html",
        r#"<section class="awards">
  <h2 id="awards-title" class="section-title">Awards</h2>
  <div id="awards-grid" class="projects-grid"></div>
</section>"#,
    ),
    (
        "contact.html",
        r#"<section id="contact" class="contact">
  <h2 id="contact-title" class="section-title">Contact</h2>
  <form class="contact-form"></form>
</section>"#,
    ),
    (
        "articles.html",
        r#"<section class="articles">
  <h2 id="articles-title" class="section-title">Articles</h2>
  <div id="article-list"></div>
</section>"#,
    ),
    (
        "article-view.html",
        r#"<article id="article-content" class="article-view">
  <p>Loading...</p>
</article>"#,
    ),
];

fn layout(body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <link rel="stylesheet" href="style.css">
</head>
<body>
<nav class="navbar">
  <div class="hamburger"><span class="bar"></span><span class="bar"></span></div>
  <ul class="nav-links">
    <li><a href="index.html">Home</a></li>
  </ul>
</nav>
<main>
{}
</main>
<footer>
  <p>&copy; <span id="year"></span> <span id="footer-rights"></span></p>
</footer>
</body>
</html>
"#,
        body
    )
}

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let content_dir = target_dir.join("content");
    let pages_dir = target_dir.join("pages");
    fs::create_dir_all(&content_dir)?;
    fs::create_dir_all(&pages_dir)?;

    fs::write(target_dir.join("_config.yml"), CONFIG)?;

    for (name, body) in [
        ("global.json", GLOBAL_JSON),
        ("home.json", HOME_JSON),
        ("about.json", ABOUT_JSON),
        ("awards.json", AWARDS_JSON),
        ("contact.json", CONTACT_JSON),
        ("articles.json", ARTICLES_JSON),
    ] {
        fs::write(content_dir.join(name), body)?;
    }

    for (name, body) in PAGES {
        fs::write(pages_dir.join(name), layout(body))?;
    }

    tracing::debug!("Scaffolded {} pages in {:?}", PAGES.len(), pages_dir);
    Ok(())
}
