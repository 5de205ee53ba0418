/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when channel data does not match the expected size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when image sizes do not agree.
    #[error("Image size ({0}x{1}) does not match the expected size ({2}x{3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when accessing a pixel outside of the image bounds.
    #[error("Pixel ({0}, {1}) is out of bounds for image size ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),
}
