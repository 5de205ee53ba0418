use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use morph_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A single 8-bit intensity plane of an image.
///
/// The plane is stored row-major in a contiguous buffer of `width * height`
/// values in the range 0-255, one per pixel. Color images are handled as
/// three independent `Channel` planes, see [`crate::ops::split_rgb`].
///
/// # Examples
///
/// ```
/// use morph_image::{Channel, ImageSize};
///
/// let channel = Channel::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![0u8, 1, 2, 3],
/// )
/// .unwrap();
///
/// assert_eq!(channel.width(), 2);
/// assert_eq!(channel.height(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    size: ImageSize,
    data: Vec<u8>,
}

impl Channel {
    /// Create a new channel plane from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the plane in pixels.
    /// * `data` - The pixel data, row-major, `width * height` values.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the size, an error is
    /// returned.
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new channel plane filled with a constant value.
    pub fn from_size_val(size: ImageSize, val: u8) -> Self {
        Self {
            size,
            data: vec![val; size.width * size.height],
        }
    }

    /// The size of the plane in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the plane in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the plane in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The pixel data as a flat row-major slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The pixel data as a mutable flat row-major slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Get the pixel value at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of bounds.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<u8, ImageError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        Ok(self.data[y * self.size.width + x])
    }

    /// Set the pixel value at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: usize, y: usize, val: u8) -> Result<(), ImageError> {
        if x >= self.size.width || y >= self.size.height {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.size.width,
                self.size.height,
            ));
        }

        self.data[y * self.size.width + x] = val;

        Ok(())
    }

    /// Consume the channel and return the underlying pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// An interleaved rgb8 image.
///
/// Pixels are stored row-major as `r, g, b` triplets in a contiguous buffer
/// of `width * height * 3` values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbImage {
    size: ImageSize,
    data: Vec<u8>,
}

impl RgbImage {
    /// Create a new rgb8 image from interleaved pixel data.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the size, an error is
    /// returned.
    pub fn new(size: ImageSize, data: Vec<u8>) -> Result<Self, ImageError> {
        if data.len() != size.width * size.height * 3 {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * 3,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new rgb8 image filled with a constant value.
    pub fn from_size_val(size: ImageSize, val: u8) -> Self {
        Self {
            size,
            data: vec![val; size.width * size.height * 3],
        }
    }

    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// The width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// The height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// The pixel data as a flat interleaved slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// The pixel data as a mutable flat interleaved slice.
    pub fn as_slice_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the image and return the underlying pixel buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
