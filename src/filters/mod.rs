//! In-place filters for RGB pixel buffers.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **In place** - the caller's buffer is mutated, never replaced or resized
//! - **Borrowing** - filters take `&mut B` and never keep or free the buffer
//! - **Snapshot reads** - neighborhood filters read from a private copy
//!   taken before the pass and dropped when it ends
//! - **Clamped output** - every channel is clamped to [0, 255] before it
//!   is stored
//!
//! ## Filter Categories
//!
//! - **Pointwise**: grayscale (all pixels, no snapshot)
//! - **Edge detection**: sobel, laplace (interior pixels only)
//! - **Stylize**: composite blur + warmth + vignette (interior pixels only)

pub mod core;
pub mod grayscale;
pub mod edge;
pub mod composite;

pub use self::composite::{apply_composite, apply_composite_with, CompositeParams};
pub use self::edge::{apply_laplace, apply_sobel};
pub use self::grayscale::{apply_grayscale, apply_grayscale_weighted, GrayscaleWeights};
