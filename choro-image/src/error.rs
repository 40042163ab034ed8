#[derive(Debug, thiserror::Error)]
pub enum ChoroImageError {
    #[error("Image buffer of {len} bytes does not match {width}x{height} RGBA dimensions")]
    InvalidBufferSize { width: u32, height: u32, len: usize },

    #[error("Unsupported data url: {0}")]
    UnsupportedDataUrl(String),

    #[error("image error")]
    ImageError(#[from] image::ImageError),

    #[error("base64 decode error")]
    Base64DecodeError(#[from] base64::DecodeError),
}
