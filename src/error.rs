use crate::raster::RasterError;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum DiplomaError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [image] failed to decode or encode an image
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// The preview could not be rasterized
    Raster(#[from] RasterError),

    #[error("invalid configuration: {0}")]
    /// The configuration file could not be parsed
    Config(#[from] serde_json::Error),

    #[error("a page referenced by the document is missing")]
    /// A page id in the page order no longer resolves to a page
    PageMissing,

    #[error("an image referenced by a page is missing")]
    /// A page places an image that was never added to the document
    ImageMissing,

    #[error("an export is already in progress")]
    /// A second export was requested while one was still running
    Busy,
}
