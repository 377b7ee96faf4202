use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to download skill catalog from: '{0}'")]
    RequestNotOk(String),
    #[error("File error: '{0}'")]
    IoError(#[from] std::io::Error),
}
