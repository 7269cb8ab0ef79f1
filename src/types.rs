use image::DynamicImage;

/// Metadata collected from a page's OpenGraph and fallback tags.
///
/// Every field is resolved on its own and is `None` when the page does not
/// provide it.
#[derive(Debug, Clone, Default)]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<DynamicImage>,
    pub url: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}
