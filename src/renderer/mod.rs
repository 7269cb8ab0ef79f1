mod basic;

pub use basic::BasicRenderer;

use crate::error::{Error, Result};
use crate::types::OpenGraph;
use image::DynamicImage;
use log::info;
use std::{fmt, str::FromStr};

/// Turns extracted metadata into an image.
pub trait Renderer {
    fn render(&self, opengraph: &OpenGraph) -> DynamicImage;
}

/// Registered renderers, addressed by name on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RendererKind {
    Basic,
}

impl RendererKind {
    pub const ALL: &'static [RendererKind] = &[RendererKind::Basic];

    pub fn name(self) -> &'static str {
        match self {
            RendererKind::Basic => "basic",
        }
    }

    fn renderer(self) -> &'static dyn Renderer {
        match self {
            RendererKind::Basic => &BasicRenderer,
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RendererKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        RendererKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownRenderer(s.to_string()))
    }
}

/// Renders `opengraph` with the renderer registered as `renderer`.
pub fn render(opengraph: &OpenGraph, renderer: &str) -> Result<DynamicImage> {
    let kind: RendererKind = renderer.parse()?;
    info!("render: renderer = {kind}");
    Ok(kind.renderer().render(opengraph))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView as _;

    #[test]
    fn parses_registered_names() {
        assert_eq!("basic".parse::<RendererKind>().unwrap(), RendererKind::Basic);
        for kind in RendererKind::ALL {
            assert_eq!(kind.to_string().parse::<RendererKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn unknown_renderer_is_rejected() {
        for name in ["fancy", "", "Basic", " basic"] {
            let err = render(&OpenGraph::default(), name).unwrap_err();
            match err {
                Error::UnknownRenderer(n) => assert_eq!(n, name),
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn render_dispatches_to_basic() {
        let image = render(&OpenGraph::default(), "basic").unwrap();
        assert_eq!(image.dimensions(), (512, 512));
    }
}
