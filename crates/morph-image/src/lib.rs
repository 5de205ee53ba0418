#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image plane representation for morphological processing.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations to split and merge channel planes.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Channel, ImageSize, RgbImage};
