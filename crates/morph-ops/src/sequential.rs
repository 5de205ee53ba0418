use morph_image::{ops as image_ops, Channel, RgbImage};

use crate::error::MorphError;
use crate::kernel::StructuringElement;
use crate::op::{EdgePolicy, Operation};

/// The per-cell reduction shared by both engines.
///
/// `rows` holds the source rows covering global rows
/// `[base_row, base_row + rows.len() / width)`; the sequential engine passes
/// the whole channel with `base_row = 0`, the tiled engine passes its halo
/// buffer. `height` is the true image height: the edge policy triggers on
/// global bounds only, never on the extent of `rows`.
pub(crate) fn reduce_pixel(
    rows: &[u8],
    width: usize,
    height: usize,
    base_row: usize,
    x: usize,
    y: usize,
    op: Operation,
    se: &StructuringElement,
    edge: EdgePolicy,
) -> u8 {
    let (radius_rows, radius_cols) = se.radius();
    let mut acc = op.identity();

    for ky in 0..se.height() {
        let gy = y as isize + ky as isize - radius_rows as isize;
        for kx in 0..se.width() {
            if !se.is_active(ky, kx) {
                continue;
            }

            let gx = x as isize + kx as isize - radius_cols as isize;
            if gy < 0 || gy >= height as isize || gx < 0 || gx >= width as isize {
                if edge == EdgePolicy::Pad {
                    acc = op.fold(acc, op.identity());
                }
                continue;
            }

            let val = rows[(gy as usize - base_row) * width + gx as usize];
            acc = op.fold(acc, val);
        }
    }

    acc
}

/// Shared source/destination validation for both engines.
pub(crate) fn validate(src: &Channel, dst: &Channel) -> Result<(), MorphError> {
    if src.width() == 0 || src.height() == 0 {
        return Err(MorphError::EmptyImage);
    }

    if src.size() != dst.size() {
        return Err(MorphError::SizeMismatch(
            dst.width(),
            dst.height(),
            src.width(),
            src.height(),
        ));
    }

    Ok(())
}

/// Apply a morphological reduction to a single channel plane.
///
/// Reference implementation: single-threaded, `O(H * W * |SE|)`. Every
/// output cell is assigned exactly once; the source is only read.
///
/// # Arguments
///
/// * `src` - The source channel plane.
/// * `dst` - The destination plane, allocated by the caller with the same
///   size as `src` (will be overwritten).
/// * `op` - Erosion (minimum) or dilation (maximum).
/// * `se` - The structuring element mask.
/// * `edge` - How out-of-bounds neighbor offsets are handled.
///
/// # Errors
///
/// Fails fast with [`MorphError::EmptyImage`] on a zero-sized source and
/// [`MorphError::SizeMismatch`] if the sizes disagree.
///
/// # Examples
///
/// ```
/// use morph_image::{Channel, ImageSize};
/// use morph_ops::sequential::apply_to_channel;
/// use morph_ops::{EdgePolicy, KernelId, Operation};
///
/// let size = ImageSize {
///     width: 3,
///     height: 3,
/// };
/// let src = Channel::new(size, vec![0, 0, 0, 0, 255, 0, 0, 0, 0]).unwrap();
/// let mut dst = Channel::from_size_val(size, 0);
///
/// let se = KernelId::Square3.build();
/// apply_to_channel(
///     &src,
///     &mut dst,
///     Operation::Dilation,
///     &se,
///     EdgePolicy::Ignore,
/// )
/// .unwrap();
///
/// assert!(dst.as_slice().iter().all(|&v| v == 255));
/// ```
pub fn apply_to_channel(
    src: &Channel,
    dst: &mut Channel,
    op: Operation,
    se: &StructuringElement,
    edge: EdgePolicy,
) -> Result<(), MorphError> {
    validate(src, dst)?;

    let width = src.width();
    let height = src.height();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    for y in 0..height {
        for x in 0..width {
            dst_data[y * width + x] = reduce_pixel(src_data, width, height, 0, x, y, op, se, edge);
        }
    }

    Ok(())
}

/// Apply a morphological reduction to an rgb8 image.
///
/// The image is split into three planes, each plane is reduced one after
/// another with the same parameters, and the results are merged back.
///
/// # Errors
///
/// Fails fast with [`MorphError::SizeMismatch`] if the destination size
/// disagrees, and propagates channel errors otherwise.
pub fn apply_to_image(
    src: &RgbImage,
    dst: &mut RgbImage,
    op: Operation,
    se: &StructuringElement,
    edge: EdgePolicy,
) -> Result<(), MorphError> {
    if src.size() != dst.size() {
        return Err(MorphError::SizeMismatch(
            dst.width(),
            dst.height(),
            src.width(),
            src.height(),
        ));
    }

    let [r, g, b] = image_ops::split_rgb(src)?;

    let mut r_out = Channel::from_size_val(src.size(), 0);
    let mut g_out = Channel::from_size_val(src.size(), 0);
    let mut b_out = Channel::from_size_val(src.size(), 0);

    apply_to_channel(&r, &mut r_out, op, se, edge)?;
    apply_to_channel(&g, &mut g_out, op, se, edge)?;
    apply_to_channel(&b, &mut b_out, op, se, edge)?;

    *dst = image_ops::merge_rgb(&r_out, &g_out, &b_out)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::KernelId;
    use morph_image::ImageSize;

    fn channel(width: usize, height: usize, data: &[u8]) -> Channel {
        Channel::new(ImageSize { width, height }, data.to_vec()).unwrap()
    }

    #[test]
    fn test_erode_square3_ignore() -> Result<(), MorphError> {
        let src = channel(3, 3, &[5, 3, 7, 6, 2, 8, 9, 4, 1]);
        let mut dst = Channel::from_size_val(src.size(), 0);

        let se = KernelId::Square3.build();
        apply_to_channel(&src, &mut dst, Operation::Erosion, &se, EdgePolicy::Ignore)?;

        assert_eq!(dst.as_slice(), &[2, 2, 2, 2, 1, 1, 2, 1, 1]);
        Ok(())
    }

    #[test]
    fn test_erode_pad_matches_ignore() -> Result<(), MorphError> {
        // padding folds 255 into a minimum, which never lowers it
        let src = channel(3, 3, &[5, 3, 7, 6, 2, 8, 9, 4, 1]);
        let mut ignored = Channel::from_size_val(src.size(), 0);
        let mut padded = Channel::from_size_val(src.size(), 0);

        let se = KernelId::Square3.build();
        apply_to_channel(
            &src,
            &mut ignored,
            Operation::Erosion,
            &se,
            EdgePolicy::Ignore,
        )?;
        apply_to_channel(&src, &mut padded, Operation::Erosion, &se, EdgePolicy::Pad)?;

        assert_eq!(ignored, padded);
        Ok(())
    }

    #[test]
    fn test_erode_uniform_border() -> Result<(), MorphError> {
        let src = Channel::from_size_val(
            ImageSize {
                width: 4,
                height: 4,
            },
            200,
        );
        let se = KernelId::Square3.build();

        for edge in [EdgePolicy::Ignore, EdgePolicy::Pad] {
            let mut dst = Channel::from_size_val(src.size(), 0);
            apply_to_channel(&src, &mut dst, Operation::Erosion, &se, edge)?;
            assert!(dst.as_slice().iter().all(|&v| v == 200));
        }
        Ok(())
    }

    #[test]
    fn test_dilate_all_zero_cross() -> Result<(), MorphError> {
        let src = Channel::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            0,
        );
        let se = KernelId::Cross3.build();

        for edge in [EdgePolicy::Ignore, EdgePolicy::Pad] {
            let mut dst = Channel::from_size_val(src.size(), 255);
            apply_to_channel(&src, &mut dst, Operation::Dilation, &se, edge)?;
            assert!(dst.as_slice().iter().all(|&v| v == 0));
        }
        Ok(())
    }

    #[test]
    fn test_dilate_single_pixel_square3() -> Result<(), MorphError> {
        let mut src = Channel::from_size_val(
            ImageSize {
                width: 5,
                height: 5,
            },
            0,
        );
        src.set_pixel(2, 2, 255)?;

        let mut dst = Channel::from_size_val(src.size(), 0);
        let se = KernelId::Square3.build();
        apply_to_channel(&src, &mut dst, Operation::Dilation, &se, EdgePolicy::Ignore)?;

        for y in 0..5 {
            for x in 0..5 {
                let expected = if (1..=3).contains(&x) && (1..=3).contains(&y) {
                    255
                } else {
                    0
                };
                assert_eq!(dst.get_pixel(x, y)?, expected);
            }
        }
        Ok(())
    }

    #[test]
    fn test_identity_kernel() -> Result<(), MorphError> {
        let src = channel(3, 3, &[10, 20, 30, 40, 50, 60, 70, 80, 90]);
        let se = StructuringElement::from_mask(vec![true], 1, 1)?;

        for op in [Operation::Erosion, Operation::Dilation] {
            for edge in [EdgePolicy::Ignore, EdgePolicy::Pad] {
                let mut dst = Channel::from_size_val(src.size(), 0);
                apply_to_channel(&src, &mut dst, op, &se, edge)?;
                assert_eq!(dst, src);
            }
        }
        Ok(())
    }

    #[test]
    fn test_hline_only_reads_own_row() -> Result<(), MorphError> {
        let src = channel(3, 3, &[9, 9, 9, 1, 2, 3, 9, 9, 9]);
        let mut dst = Channel::from_size_val(src.size(), 0);

        let se = KernelId::HLine3.build();
        apply_to_channel(&src, &mut dst, Operation::Erosion, &se, EdgePolicy::Ignore)?;

        assert_eq!(dst.as_slice(), &[9, 9, 9, 1, 1, 2, 9, 9, 9]);
        Ok(())
    }

    #[test]
    fn test_one_by_one_image() -> Result<(), MorphError> {
        let src = channel(1, 1, &[42]);
        let se = KernelId::Diamond5.build();

        let mut dst = Channel::from_size_val(src.size(), 0);
        apply_to_channel(&src, &mut dst, Operation::Erosion, &se, EdgePolicy::Ignore)?;
        assert_eq!(dst.as_slice(), &[42]);

        // padding folds 255 into the minimum, the center value still wins
        apply_to_channel(&src, &mut dst, Operation::Erosion, &se, EdgePolicy::Pad)?;
        assert_eq!(dst.as_slice(), &[42]);
        Ok(())
    }

    #[test]
    fn test_size_mismatch() {
        let src = Channel::from_size_val(
            ImageSize {
                width: 3,
                height: 3,
            },
            0,
        );
        let mut dst = Channel::from_size_val(
            ImageSize {
                width: 2,
                height: 3,
            },
            0,
        );
        let se = KernelId::Square3.build();

        assert_eq!(
            apply_to_channel(&src, &mut dst, Operation::Erosion, &se, EdgePolicy::Ignore),
            Err(MorphError::SizeMismatch(2, 3, 3, 3))
        );
    }

    #[test]
    fn test_empty_image() {
        let src = Channel::from_size_val(
            ImageSize {
                width: 0,
                height: 3,
            },
            0,
        );
        let mut dst = src.clone();
        let se = KernelId::Square3.build();

        assert_eq!(
            apply_to_channel(&src, &mut dst, Operation::Erosion, &se, EdgePolicy::Ignore),
            Err(MorphError::EmptyImage)
        );
    }

    #[test]
    fn test_apply_to_image_channels_independent() -> Result<(), MorphError> {
        // one hot pixel per channel, dilation expands each independently
        let size = ImageSize {
            width: 3,
            height: 3,
        };
        let mut data = vec![0u8; 27];
        data[4 * 3] = 255; // red at (1, 1)
        data[0 * 3 + 1] = 255; // green at (0, 0)
        data[8 * 3 + 2] = 255; // blue at (2, 2)
        let src = RgbImage::new(size, data)?;

        let mut dst = RgbImage::from_size_val(size, 0);
        let se = KernelId::Square3.build();
        apply_to_image(&src, &mut dst, Operation::Dilation, &se, EdgePolicy::Ignore)?;

        let [r, g, b] = image_ops::split_rgb(&dst)?;
        assert!(r.as_slice().iter().all(|&v| v == 255));
        assert_eq!(g.as_slice(), &[255, 255, 0, 255, 255, 0, 0, 0, 0]);
        assert_eq!(b.as_slice(), &[0, 0, 0, 0, 255, 255, 0, 255, 255]);
        Ok(())
    }
}
