#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use morph_image as image;

#[doc(inline)]
pub use morph_io as io;

#[doc(inline)]
pub use morph_ops as ops;
