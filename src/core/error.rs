use thiserror::Error;

use crate::exercises::{newton_sqrt::DomainError, repeat_reader::StreamError};

pub type Result<T> = std::result::Result<T, TourError>;

/// Errors surfaced by the command line front-end.
#[derive(Error, Debug)]
pub enum TourError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("stream validation failed: {0}")]
    Stream(#[from] StreamError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unable to parse parameter file: {0}")]
    Params(#[from] serde_json::Error),

    #[error("unable to write image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}
