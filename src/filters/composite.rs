//! Composite "artistic" filter: soft focus, warm color shift and vignette.
//!
//! Each interior pixel goes through four stages, each consuming the
//! previous stage's result:
//!
//! 1. 3x3 box average of the snapshot (integer division by 9)
//! 2. focus mix of the original pixel with that average
//! 3. per-channel color temperature multipliers
//! 4. radial darkening that grows with distance from the image center
//!
//! Intermediate values are carried as `i32`, products in `f64`, and every
//! stage truncates toward zero. Clamping happens once, after the vignette.

use tracing::debug;

use super::core::{map_interior, MaybeSync};
use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::{FilterError, FilterResult};

/// Tunables for [`apply_composite_with`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeParams {
    /// Weight of the original pixel in the focus mix.
    pub focus_weight: f64,
    /// Weight of the 3x3 box average in the focus mix.
    pub blur_weight: f64,
    /// Red, green and blue multipliers of the temperature shift.
    pub warmth: [f64; 3],
    /// Darkening at the farthest corner (0 disables the vignette).
    pub vignette_strength: f64,
}

impl Default for CompositeParams {
    fn default() -> Self {
        Self {
            focus_weight: 0.7,
            blur_weight: 0.3,
            warmth: [1.15, 1.05, 0.90],
            vignette_strength: 0.6,
        }
    }
}

impl CompositeParams {
    pub fn validate(&self) -> FilterResult<()> {
        for (name, w) in [("focus_weight", self.focus_weight), ("blur_weight", self.blur_weight)] {
            if !(0.0..=1.0).contains(&w) {
                return Err(FilterError::InvalidParameter(format!(
                    "{} must be in [0, 1], got {}",
                    name, w
                )));
            }
        }
        if self.warmth.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(FilterError::InvalidParameter(format!(
                "warmth multipliers must be finite and non-negative, got {:?}",
                self.warmth
            )));
        }
        if !self.vignette_strength.is_finite() {
            return Err(FilterError::InvalidParameter(
                "vignette_strength must be finite".into(),
            ));
        }
        Ok(())
    }
}

/// Radial darkening geometry for a `width` x `height` image.
#[derive(Clone, Copy, Debug)]
pub struct Vignette {
    center_x: f64,
    center_y: f64,
    max_dist: f64,
    strength: f64,
}

impl Vignette {
    pub fn new(width: usize, height: usize, strength: f64) -> Self {
        let center_x = width as f64 / 2.0;
        let center_y = height as f64 / 2.0;
        Self {
            center_x,
            center_y,
            max_dist: (center_x * center_x + center_y * center_y).sqrt(),
            strength,
        }
    }

    /// Darkening factor at `(row, col)`: 1.0 at the center, falling to
    /// `1 - strength` at the corners.
    pub fn factor(&self, row: usize, col: usize) -> f64 {
        if self.max_dist == 0.0 {
            return 1.0;
        }
        let dx = col as f64 - self.center_x;
        let dy = row as f64 - self.center_y;
        let ratio = (dx * dx + dy * dy).sqrt() / self.max_dist;
        1.0 - self.strength * ratio * ratio
    }
}

fn composite_at<B: PixelBuffer>(
    src: &B,
    row: usize,
    col: usize,
    params: &CompositeParams,
    vignette: &Vignette,
) -> Color {
    // Box blur estimate
    let mut sum = [0i32; 3];
    for y in row - 1..=row + 1 {
        for x in col - 1..=col + 1 {
            let px = src.pixel(y, x);
            sum[0] += px.r as i32;
            sum[1] += px.g as i32;
            sum[2] += px.b as i32;
        }
    }
    let blur = sum.map(|s| s / 9);

    let original = src.pixel(row, col).to_array();
    let factor = vignette.factor(row, col);

    let mut out = [0i32; 3];
    for c in 0..3 {
        let focused = (original[c] as f64 * params.focus_weight + blur[c] as f64 * params.blur_weight) as i32;
        let warmed = (focused as f64 * params.warmth[c]) as i32;
        out[c] = (warmed as f64 * factor) as i32;
    }

    Color::from_channels(out[0], out[1], out[2])
}

/// Apply the composite filter with default parameters.
pub fn apply_composite<B: PixelBuffer + MaybeSync>(image: &mut B) -> FilterResult<()> {
    apply_composite_with(image, &CompositeParams::default())
}

/// Apply the composite filter in place.
///
/// Invalid parameters and snapshot failures return an error before any
/// pixel is written.
pub fn apply_composite_with<B: PixelBuffer + MaybeSync>(
    image: &mut B,
    params: &CompositeParams,
) -> FilterResult<()> {
    params.validate()?;

    let (width, height) = (image.width(), image.height());
    debug!(width, height, ?params, "Applying composite");

    let vignette = Vignette::new(width, height, params.vignette_strength);
    map_interior(image, "composite", move |src: &B, row, col| {
        composite_at(src, row, col, params, &vignette)
    })
}
