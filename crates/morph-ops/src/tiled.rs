use rayon::prelude::*;

use morph_image::{ops as image_ops, Channel, RgbImage};

use crate::error::MorphError;
use crate::kernel::StructuringElement;
use crate::op::{EdgePolicy, Operation};
use crate::sequential::{reduce_pixel, validate};

/// Minimum number of output rows worth one tile of dispatch overhead.
const MIN_ROWS_PER_TILE: usize = 32;

/// One horizontal row band of the image, with a private halo-extended copy
/// of its source rows. `rows` covers global rows `[base_row, ..)`; the halo
/// is what lets boundary pixels inside the band read true neighbors without
/// touching the shared input during execution.
struct Tile {
    y0: usize,
    y1: usize,
    base_row: usize,
    rows: Vec<u8>,
}

/// Apply a morphological reduction to a single channel plane using a
/// fixed-size worker pool.
///
/// Numerically identical to [`crate::sequential::apply_to_channel`] for
/// every input; parallelism never changes the output. The plane is split
/// into horizontal row bands, each band gets a private halo-extended copy
/// of its source rows, and one task per band runs the same per-cell
/// reduction as the sequential engine, writing into its own disjoint slice
/// of the output. The edge policy triggers on global image bounds only;
/// band boundaries inside the image resolve through the halo.
///
/// The call blocks until every band completes. There is no timeout or
/// cancellation: a hung worker stalls the whole call.
///
/// # Arguments
///
/// * `src` - The source channel plane, shared read-only across workers.
/// * `dst` - The destination plane, allocated by the caller with the same
///   size as `src` (will be overwritten).
/// * `op` - Erosion (minimum) or dilation (maximum).
/// * `se` - The structuring element mask.
/// * `edge` - How out-of-bounds neighbor offsets are handled.
/// * `num_threads` - Size of the worker pool, must be > 0.
///
/// # Errors
///
/// Fails fast with [`MorphError::InvalidThreadCount`] for a zero thread
/// count and the same validation errors as the sequential engine;
/// [`MorphError::ThreadPoolBuild`] if the pool cannot be constructed. A
/// failing band aborts the call with the first error observed and no
/// partial result is promised in `dst`.
pub fn apply_to_channel(
    src: &Channel,
    dst: &mut Channel,
    op: Operation,
    se: &StructuringElement,
    edge: EdgePolicy,
    num_threads: usize,
) -> Result<(), MorphError> {
    if num_threads == 0 {
        return Err(MorphError::InvalidThreadCount(num_threads));
    }

    validate(src, dst)?;

    let width = src.width();
    let height = src.height();
    let (radius_rows, _) = se.radius();

    // never spawn more tiles than the rows can usefully support: each tile
    // must cover at least the vertical kernel footprint and a minimum
    // working band
    let tile_count = num_threads.min((height / MIN_ROWS_PER_TILE.max(2 * radius_rows + 1)).max(1));
    let rows_per_tile = height.div_ceil(tile_count);

    let src_data = src.as_slice();
    let mut tiles = Vec::with_capacity(tile_count);
    for t in 0..tile_count {
        let y0 = t * rows_per_tile;
        if y0 >= height {
            break;
        }
        let y1 = height.min(y0 + rows_per_tile);

        let base_row = y0.saturating_sub(radius_rows);
        let halo_end = height.min(y1 + radius_rows);

        // rows are contiguous, so the halo-extended range is one copy
        tiles.push(Tile {
            y0,
            y1,
            base_row,
            rows: src_data[base_row * width..halo_end * width].to_vec(),
        });
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .map_err(|e| MorphError::ThreadPoolBuild(e.to_string()))?;

    // par_chunks_mut partitions the output into non-overlapping row bands,
    // one per tile; the disjointness of the writes is carried by the slice
    // partition itself
    let dst_data = dst.as_slice_mut();
    pool.install(|| {
        tiles
            .par_iter()
            .zip(dst_data.par_chunks_mut(rows_per_tile * width))
            .try_for_each(|(tile, band)| {
                let band_rows = tile.y1 - tile.y0;
                if band.len() != band_rows * width {
                    return Err(MorphError::TileShapeMismatch(band_rows * width, band.len()));
                }

                for y in tile.y0..tile.y1 {
                    for x in 0..width {
                        band[(y - tile.y0) * width + x] = reduce_pixel(
                            &tile.rows,
                            width,
                            height,
                            tile.base_row,
                            x,
                            y,
                            op,
                            se,
                            edge,
                        );
                    }
                }

                Ok(())
            })
    })
}

/// Apply a morphological reduction to an rgb8 image using a fixed-size
/// worker pool.
///
/// The three planes are processed one after another; each plane's rows are
/// reduced in parallel. See [`apply_to_channel`].
///
/// # Errors
///
/// Same failure modes as [`apply_to_channel`].
pub fn apply_to_image(
    src: &RgbImage,
    dst: &mut RgbImage,
    op: Operation,
    se: &StructuringElement,
    edge: EdgePolicy,
    num_threads: usize,
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

    apply_to_channel(&r, &mut r_out, op, se, edge, num_threads)?;
    apply_to_channel(&g, &mut g_out, op, se, edge, num_threads)?;
    apply_to_channel(&b, &mut b_out, op, se, edge, num_threads)?;

    *dst = image_ops::merge_rgb(&r_out, &g_out, &b_out)?;

    Ok(())
}
