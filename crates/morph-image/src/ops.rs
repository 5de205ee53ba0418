use crate::error::ImageError;
use crate::image::{Channel, RgbImage};

/// Split an interleaved rgb8 image into three independent channel planes.
///
/// # Arguments
///
/// * `src` - The source rgb8 image.
///
/// # Returns
///
/// The red, green and blue planes, each the same size as the source.
///
/// # Examples
///
/// ```
/// use morph_image::{ImageSize, RgbImage};
/// use morph_image::ops::split_rgb;
///
/// let image = RgbImage::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![10, 20, 30],
/// )
/// .unwrap();
///
/// let [r, g, b] = split_rgb(&image).unwrap();
/// assert_eq!(r.as_slice(), &[10]);
/// assert_eq!(g.as_slice(), &[20]);
/// assert_eq!(b.as_slice(), &[30]);
/// ```
pub fn split_rgb(src: &RgbImage) -> Result<[Channel; 3], ImageError> {
    let size = src.size();
    let num_pixels = size.width * size.height;

    let mut r = vec![0u8; num_pixels];
    let mut g = vec![0u8; num_pixels];
    let mut b = vec![0u8; num_pixels];

    src.as_slice()
        .chunks_exact(3)
        .enumerate()
        .for_each(|(i, px)| {
            r[i] = px[0];
            g[i] = px[1];
            b[i] = px[2];
        });

    Ok([
        Channel::new(size, r)?,
        Channel::new(size, g)?,
        Channel::new(size, b)?,
    ])
}

/// Merge three channel planes back into an interleaved rgb8 image.
///
/// # Arguments
///
/// * `r` - The red plane.
/// * `g` - The green plane.
/// * `b` - The blue plane.
///
/// # Errors
///
/// Returns an error if the plane sizes do not agree.
pub fn merge_rgb(r: &Channel, g: &Channel, b: &Channel) -> Result<RgbImage, ImageError> {
    let size = r.size();
    if g.size() != size {
        return Err(ImageError::InvalidImageSize(
            g.width(),
            g.height(),
            size.width,
            size.height,
        ));
    }
    if b.size() != size {
        return Err(ImageError::InvalidImageSize(
            b.width(),
            b.height(),
            size.width,
            size.height,
        ));
    }

    let mut data = vec![0u8; size.width * size.height * 3];
    data.chunks_exact_mut(3)
        .zip(
            r.as_slice()
                .iter()
                .zip(g.as_slice().iter().zip(b.as_slice().iter())),
        )
        .for_each(|(px, (&r_val, (&g_val, &b_val)))| {
            px[0] = r_val;
            px[1] = g_val;
            px[2] = b_val;
        });

    RgbImage::new(size, data)
}
