mod error;
mod fetch;
mod parse;
mod renderer;
mod types;

pub use error::{Error, Result};
pub use fetch::{decode_image, HttpFetcher, ImageFetcher};
pub use parse::{extract, opengraph_from_html, Tag, TagFinder};
pub use renderer::{render, BasicRenderer, Renderer, RendererKind};
pub use types::{OpenGraph, Size};

use image::DynamicImage;
use log::info;

/// Fetches `url` and extracts its metadata, using `url` itself when the page
/// declares neither `og:url` nor a canonical link.
pub async fn opengraph_from_url(url: &str) -> Result<OpenGraph> {
    let fetcher = HttpFetcher::new()?;
    let html = fetcher.fetch_document(url).await?;
    let opengraph = opengraph_from_html(&html, Some(url), &fetcher).await;
    info!(
        "opengraph_from_url: url = {url}, title = {:?}, image = {}",
        opengraph.title,
        opengraph.image.is_some()
    );
    Ok(opengraph)
}

/// Fetches `url` and renders its metadata with the named renderer.
pub async fn render_url(url: &str, renderer: &str) -> Result<DynamicImage> {
    // Reject a bad renderer before touching the network.
    let kind: RendererKind = renderer.parse()?;
    let opengraph = opengraph_from_url(url).await?;
    render(&opengraph, kind.name())
}
