use super::Renderer;
use crate::types::{OpenGraph, Size};
use image::DynamicImage;

const CANVAS_SIZE: Size = Size {
    width: 512,
    height: 512,
};

/// Placeholder renderer: a transparent canvas regardless of the metadata.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicRenderer;

impl Renderer for BasicRenderer {
    fn render(&self, _opengraph: &OpenGraph) -> DynamicImage {
        DynamicImage::new_rgba8(CANVAS_SIZE.width, CANVAS_SIZE.height)
    }
}
