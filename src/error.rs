use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scene: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write image: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid scene: {0}")]
    InvalidScene(String),
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
}
