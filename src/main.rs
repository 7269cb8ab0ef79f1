use anyhow::{Context as _, Result};
use clap::Parser;
use log::info;
use opengraph_renderer::render_url;
use std::path::PathBuf;

/// Render a web page's OpenGraph metadata into an image
#[derive(Parser, Debug)]
#[command(name = "opengraph-renderer", version, about)]
struct Cli {
    /// Page to read metadata from
    url: String,

    /// Renderer to use: basic
    #[arg(long, env = "OG_RENDERER", default_value = "basic")]
    renderer: String,

    /// Output file; the image format follows the extension
    #[arg(long, env = "OG_OUT", default_value = "output.png")]
    out: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenv::dotenv();
    env_logger::init();

    let cli = Cli::parse();
    info!("url = {}, renderer = {}, out = {}", cli.url, cli.renderer, cli.out.display());

    let image = render_url(&cli.url, &cli.renderer)
        .await
        .with_context(|| format!("failed to render {}", cli.url))?;
    image
        .save(&cli.out)
        .with_context(|| format!("failed to save image to {}", cli.out.display()))?;

    info!("saved {}", cli.out.display());
    Ok(())
}
