//! Grayscale conversion filter.
//!
//! Pointwise: each output pixel depends only on the same input pixel, so
//! the buffer is rewritten in a single pass without a snapshot.
//!
//! The weighted sum is evaluated with integer weights and one truncating
//! division. This matches truncating the exact real-valued sum, and makes
//! the conversion idempotent: a pixel with R=G=B=v maps to v again.

use tracing::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::color::{clamp_channel, Color};
use crate::error::{FilterError, FilterResult};

/// RGB channel weights for grayscale conversion.
///
/// Weights are relative: the gray level is
/// `(r*R + g*G + b*B) / (r + g + b)`, truncated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrayscaleWeights {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl Default for GrayscaleWeights {
    fn default() -> Self {
        Self::luma()
    }
}

impl GrayscaleWeights {
    /// 0.30 / 0.59 / 0.11 (default)
    pub const fn luma() -> Self {
        Self { r: 30, g: 59, b: 11 }
    }

    /// ITU-R BT.709 luminosity coefficients
    pub const fn bt709() -> Self {
        Self { r: 2126, g: 7152, b: 722 }
    }

    /// Simple average (R+G+B)/3
    pub const fn average() -> Self {
        Self { r: 1, g: 1, b: 1 }
    }

    /// Custom relative weights. At least one weight must be non-zero.
    pub fn custom(r: u32, g: u32, b: u32) -> FilterResult<Self> {
        let weights = Self { r, g, b };
        if weights.total() == 0 {
            return Err(FilterError::InvalidParameter(
                "grayscale weights must not all be zero".into(),
            ));
        }
        Ok(weights)
    }

    fn total(&self) -> u64 {
        self.r as u64 + self.g as u64 + self.b as u64
    }

    /// Gray level of a single color.
    #[inline]
    pub fn gray(&self, c: Color) -> u8 {
        let total = self.total().max(1);
        let sum = self.r as u64 * c.r as u64 + self.g as u64 * c.g as u64 + self.b as u64 * c.b as u64;
        // sum / total <= 255 since each channel <= 255
        clamp_channel((sum / total) as i32)
    }
}

/// Convert every pixel to `(gray, gray, gray)` with the default weights.
///
/// `gray = trunc(0.30*R + 0.59*G + 0.11*B)`
pub fn apply_grayscale<B: PixelBuffer>(image: &mut B) {
    apply_grayscale_weighted(image, GrayscaleWeights::default());
}

/// Convert every pixel to gray using custom weights.
pub fn apply_grayscale_weighted<B: PixelBuffer>(image: &mut B, weights: GrayscaleWeights) {
    let (width, height) = (image.width(), image.height());
    trace!(width, height, ?weights, "grayscale");
    debug!(width, height, "Applying grayscale");

    for row in 0..height {
        for col in 0..width {
            let gray = weights.gray(image.pixel(row, col));
            image.set_pixel(row, col, Color::gray(gray));
        }
    }
}
