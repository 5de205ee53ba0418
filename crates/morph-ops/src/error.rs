use morph_image::ImageError;

/// An error type for morphological operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum MorphError {
    /// The numeric structuring element identifier is not in the catalog.
    #[error("unsupported structuring element id: {0} (expected 1..=5)")]
    UnsupportedKernelId(u8),

    /// The kernel has zero width or height.
    #[error("kernel has zero width or height")]
    EmptyKernel,

    /// The kernel mask length does not match its dimensions.
    #[error("kernel mask length ({0}) does not match its dimensions ({1})")]
    InvalidKernelLength(usize, usize),

    /// The kernel dimensions must be odd so a unique center cell exists.
    #[error("kernel dimensions must be odd, got {0}x{1}")]
    EvenKernelDimensions(usize, usize),

    /// Every cell in the kernel mask is inactive.
    #[error("kernel mask has no active cells")]
    InactiveKernel,

    /// The input channel has zero width or height.
    #[error("image has zero width or height")]
    EmptyImage,

    /// Source and destination sizes do not match.
    #[error("destination size ({0}x{1}) does not match the source size ({2}x{3})")]
    SizeMismatch(usize, usize, usize, usize),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    ThreadPoolBuild(String),

    /// A tile's output band does not cover its assigned row range.
    #[error("tile output band length ({1}) does not match its row range ({0})")]
    TileShapeMismatch(usize, usize),

    /// Error when manipulating the underlying image planes.
    #[error("image error: {0}")]
    Image(#[from] ImageError),
}
