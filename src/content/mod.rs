//! Content module - content documents, their retrieval and loading strategies

mod fetcher;
pub mod loader;
mod model;

pub use fetcher::{ContentFetcher, ContentSource, FetchError};
pub use loader::{ContentLoader, Section, SectionContent};
pub use model::{
    AboutContent, Article, ArticleSection, Award, AwardsContent, ContactContent, GlobalContent,
    HomeContent, NavEntry, Titles,
};
