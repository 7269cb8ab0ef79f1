use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("unknown renderer: {0}")]
    UnknownRenderer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
