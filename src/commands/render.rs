//! Headless preview of one page load

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::Folio;

/// Load `page` with the given query string and print or write the result
pub async fn run(folio: &Folio, page: &str, query: &str, output: Option<&Path>) -> Result<()> {
    let start = std::time::Instant::now();
    let html = folio.render_page(page, query).await?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &html)?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", html),
    }

    tracing::info!("Rendered {} in {:.2}s", page, start.elapsed().as_secs_f64());
    Ok(())
}
