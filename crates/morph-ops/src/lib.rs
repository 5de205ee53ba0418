#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for morphological operations.
pub mod error;

/// Structuring element catalog.
pub mod kernel;

/// Operation and edge policy selectors.
pub mod op;

/// Single-threaded reference engine.
pub mod sequential;

/// Tiled multi-threaded engine.
pub mod tiled;

pub use crate::error::MorphError;
pub use crate::kernel::{KernelId, StructuringElement};
pub use crate::op::{EdgePolicy, Operation};
