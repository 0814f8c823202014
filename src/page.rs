//! Page session - one page view from load to teardown
//!
//! The session owns the document and one controller per concern. DOM events
//! are delivered as [`Event`] messages and handled synchronously; content
//! documents are applied as they arrive.

use crate::config::{FetchStrategy, SiteConfig};
use crate::content::{ContentLoader, SectionContent};
use crate::dom::{Document, NodeId};
use crate::helpers::{current_year, footer_year, query_param};
use crate::render::PageRenderer;
use crate::ui::{
    Intersection, NavigationController, ObserverOptions, ScrollOutcome, SmoothScrollController,
    VisibilityObserver,
};

/// A DOM event delivered to the session
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Activation of a node (bubbles to its ancestors)
    Click(NodeId),
    /// Intersection results from the layout engine
    Intersections(Vec<Intersection>),
}

/// Observable outcome of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    MenuToggled { open: bool },
    MenuClosed,
    /// Default navigation suppressed; smooth-scroll to the node
    ScrollTo(NodeId),
    /// Default navigation suppressed with nothing to scroll to
    NavigationSuppressed,
    Revealed(Vec<NodeId>),
}

/// One loaded page and its controllers
#[derive(Debug)]
pub struct PageSession {
    doc: Document,
    nav: Option<NavigationController>,
    scroll: SmoothScrollController,
    observer: VisibilityObserver,
    renderer: PageRenderer,
    article_id: Option<String>,
}

impl PageSession {
    /// Attach the controllers to a freshly parsed page.
    ///
    /// `query` is the page's query string (with or without the leading `?`).
    pub fn init(mut doc: Document, config: &SiteConfig, query: &str) -> Self {
        Self::init_with_year(&mut doc, config, current_year());
        Self::assemble(doc, config, query)
    }

    fn init_with_year(doc: &mut Document, config: &SiteConfig, year: i32) {
        if let Some(node) = doc.get_element_by_id("year") {
            doc.set_text_content(node, &footer_year(config.start_year, year));
        }
    }

    fn assemble(mut doc: Document, config: &SiteConfig, query: &str) -> Self {
        let nav = NavigationController::attach(&mut doc);
        if nav.is_none() {
            tracing::debug!("No navigation toggle on this page");
        }
        let scroll = SmoothScrollController::attach(&doc);

        let mut observer = VisibilityObserver::new(ObserverOptions::from(&config.observer));
        let watched = observer.observe_static(&mut doc, &config.animate);
        tracing::debug!(
            "Watching {} elements, {} smooth-scroll anchors",
            watched.len(),
            scroll.len()
        );

        Self {
            doc,
            nav,
            scroll,
            observer,
            renderer: PageRenderer::new(config),
            article_id: query_param(query, "id"),
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn observer(&self) -> &VisibilityObserver {
        &self.observer
    }

    pub fn navigation(&self) -> Option<&NavigationController> {
        self.nav.as_ref()
    }

    /// Render one section and register what it created
    pub fn apply(&mut self, content: &SectionContent) {
        let rendered = self
            .renderer
            .render(&mut self.doc, content, self.article_id.as_deref());

        let dropped = self.observer.prune(&self.doc);
        for node in &rendered.fade_in {
            self.observer.observe(*node);
        }
        if let Some(nav) = self.nav.as_mut() {
            nav.bind_links(rendered.nav_links);
        }
        tracing::debug!(
            "Rendered {} ({} new fade-in elements, {} replaced)",
            content.section(),
            rendered.fade_in.len(),
            dropped
        );
    }

    /// Fetch content with the loader's strategy and render it.
    ///
    /// With the split strategy each section renders as soon as its own
    /// document arrives; the monolithic strategy renders everything or
    /// nothing.
    pub async fn load(&mut self, loader: &ContentLoader) {
        match loader.strategy() {
            FetchStrategy::Split => {
                let mut tasks = loader.spawn_split();
                while let Some(joined) = tasks.join_next().await {
                    match joined {
                        Ok((_, Some(content))) => self.apply(&content),
                        Ok((section, None)) => {
                            tracing::debug!("Skipping {}: no content", section)
                        }
                        Err(e) => tracing::warn!("Content task failed: {}", e),
                    }
                }
            }
            FetchStrategy::Monolithic => {
                let Some(sections) = loader.load_monolithic().await else {
                    return;
                };
                for content in &sections {
                    self.apply(content);
                }
            }
        }
    }

    /// Deliver one event
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::Click(node) => self.click(node),
            Event::Intersections(entries) => {
                let revealed = self.observer.on_intersections(&mut self.doc, &entries);
                if revealed.is_empty() {
                    Vec::new()
                } else {
                    vec![Effect::Revealed(revealed)]
                }
            }
        }
    }

    /// Run the click handlers from the target outwards
    fn click(&mut self, target: NodeId) -> Vec<Effect> {
        let mut effects = Vec::new();

        for node in self.doc.ancestors(target) {
            if let Some(nav) = self.nav.as_mut() {
                if node == nav.toggle_node() {
                    let open = nav.toggle(&mut self.doc);
                    effects.push(Effect::MenuToggled { open });
                } else if nav.is_menu_link(node) {
                    nav.close(&mut self.doc);
                    effects.push(Effect::MenuClosed);
                }
            }

            match self.scroll.activate(&self.doc, node) {
                ScrollOutcome::Ignored => {}
                ScrollOutcome::Suppressed => effects.push(Effect::NavigationSuppressed),
                ScrollOutcome::ScrollTo(to) => effects.push(Effect::ScrollTo(to)),
            }
        }

        effects
    }

    /// Serialize the current state of the page
    pub fn to_html(&self) -> String {
        self.doc.to_html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentFetcher, ContentSource, GlobalContent, NavEntry};
    use crate::ui::{Rect, Viewport, FADE_IN_CLASS, VISIBLE_CLASS};
    use std::fs;
    use tempfile::tempdir;

    const PAGE: &str = r##"<!DOCTYPE html>
<html><body>
<nav>
  <div class="hamburger"><span class="bar"></span></div>
  <ul class="nav-links"><li><a href="#contact">Contact</a></li></ul>
</nav>
<section class="hero-text"><h1 id="hero-title">Static</h1></section>
<div id="awards-grid"></div>
<section id="contact" class="contact-form"></section>
<footer><span id="footer-rights"></span> <span id="year"></span></footer>
</body></html>"##;

    fn session(query: &str) -> PageSession {
        let mut doc = Document::parse(PAGE);
        let config = SiteConfig::default();
        PageSession::init_with_year(&mut doc, &config, 2027);
        PageSession::assemble(doc, &config, query)
    }

    fn viewport() -> Viewport {
        Viewport {
            width: 1024.0,
            height: 768.0,
        }
    }

    #[test]
    fn test_init_marks_static_items_and_year() {
        let s = session("");
        let doc = s.document();
        let hero = doc.query_class("hero-text")[0];
        let contact = doc.get_element_by_id("contact").unwrap();
        assert!(doc.has_class(hero, FADE_IN_CLASS));
        assert!(doc.has_class(contact, FADE_IN_CLASS));
        assert_eq!(s.observer().watched().count(), 2);

        let year = doc.get_element_by_id("year").unwrap();
        assert_eq!(doc.text_content(year), "2026-2027");
    }

    #[test]
    fn test_click_bubbles_to_toggle() {
        let mut s = session("");
        let bar = s.document().query_class("bar")[0];
        assert_eq!(
            s.dispatch(Event::Click(bar)),
            vec![Effect::MenuToggled { open: true }]
        );
        assert_eq!(
            s.dispatch(Event::Click(bar)),
            vec![Effect::MenuToggled { open: false }]
        );
    }

    #[test]
    fn test_nav_link_closes_menu_and_scrolls() {
        let mut s = session("");
        let toggle = s.navigation().unwrap().toggle_node();
        s.dispatch(Event::Click(toggle));
        assert!(s.navigation().unwrap().is_open());

        let link = s.document().query_tag("a")[0];
        let contact = s.document().get_element_by_id("contact").unwrap();
        assert_eq!(
            s.dispatch(Event::Click(link)),
            vec![Effect::MenuClosed, Effect::ScrollTo(contact)]
        );
        assert!(!s.navigation().unwrap().is_open());

        // Already closed: still closed
        s.dispatch(Event::Click(link));
        assert!(!s.navigation().unwrap().is_open());
    }

    #[test]
    fn test_generated_nav_links_close_menu() {
        let mut s = session("");
        s.apply(&SectionContent::Global(GlobalContent {
            nav: vec![NavEntry {
                url: "about.html".to_string(),
                label: "About".to_string(),
            }],
            ..Default::default()
        }));

        let toggle = s.navigation().unwrap().toggle_node();
        s.dispatch(Event::Click(toggle));
        let link = s.document().query_tag("a")[0];
        assert_eq!(s.dispatch(Event::Click(link)), vec![Effect::MenuClosed]);
    }

    #[test]
    fn test_rendered_cards_are_observed_once() {
        let mut s = session("");
        s.apply(&SectionContent::Awards(crate::content::AwardsContent {
            title: None,
            awards: Some(vec![crate::content::Award {
                title: "X".to_string(),
                description: "Y".to_string(),
            }]),
        }));
        let card = s.document().query_class("project-card")[0];
        assert!(s.observer().is_watching(card));

        let entry = Intersection {
            node: card,
            rect: Rect::new(0.0, 100.0, 300.0, 200.0),
            viewport: viewport(),
        };
        assert_eq!(
            s.dispatch(Event::Intersections(vec![entry])),
            vec![Effect::Revealed(vec![card])]
        );
        assert!(s.document().has_class(card, VISIBLE_CLASS));
        assert!(s.dispatch(Event::Intersections(vec![entry])).is_empty());
    }

    #[test]
    fn test_replaced_static_cards_are_dropped() {
        let doc = Document::parse(
            r#"<html><body><div id="awards-grid"><div class="project-card">Static</div></div></body></html>"#,
        );
        let mut s = PageSession::assemble(doc, &SiteConfig::default(), "");
        let placeholder = s.document().query_class("project-card")[0];
        assert!(s.observer().is_watching(placeholder));

        s.apply(&SectionContent::Awards(crate::content::AwardsContent {
            title: None,
            awards: Some(vec![crate::content::Award {
                title: "X".to_string(),
                description: "Y".to_string(),
            }]),
        }));
        let card = s.document().query_class("project-card")[0];
        assert_ne!(card, placeholder);
        assert!(!s.observer().is_watching(placeholder));
        assert_eq!(s.observer().watched().collect::<Vec<_>>(), vec![card]);
    }

    #[tokio::test]
    async fn test_load_split_renders_available_sections() {
        let dir = tempdir().unwrap();
        let content = dir.path().join("content");
        fs::create_dir_all(&content).unwrap();
        fs::write(content.join("awards.json"), "[]").unwrap();
        fs::write(
            content.join("home.json"),
            r#"{"hero_title": "Hello <em>world</em>"}"#,
        )
        .unwrap();
        fs::write(content.join("global.json"), "not json").unwrap();

        let fetcher =
            ContentFetcher::new(ContentSource::Dir(dir.path().to_path_buf()), None).unwrap();
        let loader = ContentLoader::new(fetcher, FetchStrategy::Split, "content", "data.json");

        let mut s = session("");
        s.load(&loader).await;
        let html = s.to_html();
        assert!(html.contains(r#"<h1 id="hero-title">Hello <em>world</em></h1>"#));
        assert!(html.contains("No Honor &amp; Rewards Published"));
        // global.json failed: footer left as is
        assert!(html.contains(r#"<span id="footer-rights"></span>"#));
    }

    fn monolithic_loader(dir: &std::path::Path) -> ContentLoader {
        let fetcher = ContentFetcher::new(ContentSource::Dir(dir.to_path_buf()), None).unwrap();
        ContentLoader::new(fetcher, FetchStrategy::Monolithic, "content", "data.json")
    }

    #[tokio::test]
    async fn test_load_monolithic_rebuilds_nav() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("data.json"),
            r#"{
                "common": {
                    "nav": {"contact": "Contact", "home": "Home"},
                    "footer_rights": "All rights reserved."
                },
                "home": {"hero_title": "Hi"},
                "awards": {"title": "Honors", "awards_list": [{"title": "X", "description": "Y"}]}
            }"#,
        )
        .unwrap();

        let mut s = session("");
        s.load(&monolithic_loader(dir.path())).await;

        let doc = s.document();
        let menu = doc.query_class("nav-links")[0];
        assert_eq!(
            doc.inner_html(menu),
            r#"<li><a href="index.html">Home</a></li><li><a href="contact.html">Contact</a></li>"#
        );
        let footer = doc.get_element_by_id("footer-rights").unwrap();
        assert_eq!(doc.text_content(footer), "All rights reserved.");
        let card = doc.query_class("project-card")[0];
        assert!(s.observer().is_watching(card));

        let toggle = s.navigation().unwrap().toggle_node();
        s.dispatch(Event::Click(toggle));
        assert!(s.navigation().unwrap().is_open());
        let home = s.document().query_tag_within(menu, "a")[0];
        assert_eq!(s.dispatch(Event::Click(home)), vec![Effect::MenuClosed]);
        assert!(!s.navigation().unwrap().is_open());
    }

    #[tokio::test]
    async fn test_load_monolithic_failure_keeps_static_markup() {
        let dir = tempdir().unwrap();
        let loader = monolithic_loader(dir.path());

        let mut s = session("");
        let before = s.to_html();
        s.load(&loader).await;
        assert_eq!(s.to_html(), before);

        fs::write(dir.path().join("data.json"), "{ truncated").unwrap();
        s.load(&loader).await;
        assert_eq!(s.to_html(), before);
        assert_eq!(s.observer().watched().count(), 2);
    }
}
