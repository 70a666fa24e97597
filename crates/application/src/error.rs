use std::path::PathBuf;

use heic2png_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("folder does not exist: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    #[error("image codec unavailable: {0}")]
    CodecUnavailable(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
}
