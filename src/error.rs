use thiserror::Error;

/// Errors raised by the image loader collaborator. The editor core
/// never produces these: a failed load leaves the session untouched.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("not a supported image type")]
    UnsupportedFormat,
    #[error("no file was provided")]
    NoData,
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
