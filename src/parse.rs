//! OpenGraph extraction.
//!
//! Each field has its own lookup chain. The first tag found for a field
//! decides it: when that tag lacks the wanted attribute the field stays
//! `None` and later lookups are not consulted.

use crate::fetch::ImageFetcher;
use crate::types::OpenGraph;
use image::DynamicImage;
use log::{debug, warn};
use select::{document::Document, node::Node, predicate::Predicate};

/// Attributes whose value is a whitespace separated token list.
const TOKEN_LIST_ATTRS: &[&str] = &["rel"];

/// Attribute-filtered tag search over a parsed page.
pub trait TagFinder {
    /// Returns the first tag in document order named `name` whose attributes
    /// satisfy every `(attribute, value)` filter.
    fn find_tag(&self, name: &str, filters: &[(&str, &str)]) -> Option<Tag<'_>>;
}

/// A tag found by a [`TagFinder`].
#[derive(Clone, Copy)]
pub struct Tag<'a>(Node<'a>);

impl<'a> Tag<'a> {
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.attr(name)
    }

    pub fn text(&self) -> String {
        self.0.text()
    }
}

struct TagQuery<'q> {
    name: &'q str,
    filters: &'q [(&'q str, &'q str)],
}

impl Predicate for TagQuery<'_> {
    fn matches(&self, node: &Node) -> bool {
        node.name() == Some(self.name)
            && self.filters.iter().all(|&(attr, expected)| {
                match node.attr(attr) {
                    Some(value) if TOKEN_LIST_ATTRS.contains(&attr) => {
                        value.split_ascii_whitespace().any(|token| token == expected)
                    }
                    Some(value) => value == expected,
                    None => false,
                }
            })
    }
}

impl TagFinder for Document {
    fn find_tag(&self, name: &str, filters: &[(&str, &str)]) -> Option<Tag<'_>> {
        self.find(TagQuery { name, filters }).next().map(Tag)
    }
}

/// Parses `html` and extracts its OpenGraph metadata.
pub async fn opengraph_from_html<F>(
    html: &str,
    fallback_url: Option<&str>,
    fetcher: &F,
) -> OpenGraph
where
    F: ImageFetcher + ?Sized,
{
    let document = Document::from(html);
    extract(&document, fallback_url, fetcher).await
}

/// Resolves every metadata field of `document`. Never fails; a field that
/// cannot be resolved is `None`.
pub async fn extract<D, F>(document: &D, fallback_url: Option<&str>, fetcher: &F) -> OpenGraph
where
    D: TagFinder + ?Sized,
    F: ImageFetcher + ?Sized,
{
    OpenGraph {
        title: find_title(document),
        description: find_description(document),
        image: find_image(document, fetcher).await,
        url: find_url(document, fallback_url),
        color: find_theme_color(document),
    }
}

fn content_of<D: TagFinder + ?Sized>(
    document: &D,
    name: &str,
    filters: &[(&str, &str)],
    attr: &str,
) -> Option<Option<String>> {
    let tag = document.find_tag(name, filters)?;
    debug!("found <{name}> matching {filters:?}");
    Some(tag.attr(attr).map(str::to_string))
}

fn find_title<D: TagFinder + ?Sized>(document: &D) -> Option<String> {
    if let Some(title) = content_of(document, "meta", &[("property", "og:title")], "content") {
        return title;
    }
    document.find_tag("title", &[]).map(|tag| tag.text())
}

fn find_description<D: TagFinder + ?Sized>(document: &D) -> Option<String> {
    content_of(document, "meta", &[("property", "og:description")], "content")
        .or_else(|| content_of(document, "meta", &[("name", "description")], "content"))
        .flatten()
}

async fn find_image<D, F>(document: &D, fetcher: &F) -> Option<DynamicImage>
where
    D: TagFinder + ?Sized,
    F: ImageFetcher + ?Sized,
{
    let url = content_of(document, "meta", &[("property", "og:image")], "content")?;
    let Some(url) = url else {
        warn!("og:image has no content attribute");
        return None;
    };
    match fetcher.fetch_image(&url).await {
        Ok(image) => Some(image),
        Err(e) => {
            warn!("failed to load og:image {url}: {e}");
            None
        }
    }
}

fn find_url<D: TagFinder + ?Sized>(document: &D, fallback: Option<&str>) -> Option<String> {
    content_of(document, "meta", &[("property", "og:url")], "content")
        .or_else(|| content_of(document, "link", &[("rel", "canonical")], "href"))
        .unwrap_or_else(|| fallback.map(str::to_string))
}

fn find_theme_color<D: TagFinder + ?Sized>(document: &D) -> Option<String> {
    content_of(document, "meta", &[("name", "theme-color")], "content").flatten()
}
