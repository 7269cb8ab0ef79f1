use crate::error::Result;
use async_trait::async_trait;
use image::DynamicImage;
use log::{debug, info};
use reqwest::Client;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Source of preview images referenced by `og:image`.
#[async_trait]
pub trait ImageFetcher {
    async fn fetch_image(&self, url: &str) -> Result<DynamicImage>;
}

/// Fetches pages and images over HTTP with a shared client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Downloads the page body. The status code is not checked, an error page
    /// is parsed like any other document.
    pub async fn fetch_document(&self, url: &str) -> Result<String> {
        info!("fetch_document: url = {url}");
        let html = self.client.get(url).send().await?.text().await?;
        debug!("fetched {} bytes from {url}", html.len());
        Ok(html)
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch_image(&self, url: &str) -> Result<DynamicImage> {
        info!("fetch_image: url = {url}");
        let bytes = self.client.get(url).send().await?.bytes().await?;
        decode_image(&bytes)
    }
}

pub fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    Ok(img)
}
