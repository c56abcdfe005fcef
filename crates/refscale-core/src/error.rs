use thiserror::Error;

#[derive(Error, Debug)]
pub enum RefscaleError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Empty image")]
    EmptyImage,
}

pub type Result<T> = std::result::Result<T, RefscaleError>;
