//! Edge detection filters: Sobel and Laplace.
//!
//! Both filters work per channel on the 3x3 neighborhood of every interior
//! pixel, reading from a snapshot of the buffer taken before the pass. The
//! 1-pixel border is left as it was.

use tracing::debug;

use super::core::{convolve3, map_interior, Kernel3, MaybeSync};
use crate::buffer::PixelBuffer;
use crate::color::{clamp_channel_f64, Color};
use crate::error::FilterResult;

// ============================================================================
// Sobel Edge Detection
// ============================================================================

/// Horizontal gradient kernel.
pub const SOBEL_X: Kernel3 = [[1, 0, -1], [2, 0, -2], [1, 0, -1]];

/// Vertical gradient kernel.
pub const SOBEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Sobel gradient magnitude at one interior pixel of `src`.
///
/// Per channel: `trunc(sqrt(gx^2 + gy^2))`, clamped.
pub fn sobel_at<B: PixelBuffer>(src: &B, row: usize, col: usize) -> Color {
    let gx = convolve3(src, row, col, &SOBEL_X);
    let gy = convolve3(src, row, col, &SOBEL_Y);

    let magnitude = |c: usize| {
        let (x, y) = (gx[c] as f64, gy[c] as f64);
        clamp_channel_f64((x * x + y * y).sqrt())
    };

    Color::new(magnitude(0), magnitude(1), magnitude(2))
}

/// Apply Sobel edge detection in place.
///
/// On error (snapshot allocation) the buffer is unchanged.
pub fn apply_sobel<B: PixelBuffer + MaybeSync>(image: &mut B) -> FilterResult<()> {
    debug!(width = image.width(), height = image.height(), "Applying Sobel");
    map_interior(image, "sobel", sobel_at::<B>)
}

// ============================================================================
// Laplace Edge Detection
// ============================================================================

/// 4-neighbor Laplace kernel.
pub const LAPLACE: Kernel3 = [[0, -1, 0], [-1, 4, -1], [0, -1, 0]];

/// Laplace response at one interior pixel of `src`, clamped per channel.
pub fn laplace_at<B: PixelBuffer>(src: &B, row: usize, col: usize) -> Color {
    let [r, g, b] = convolve3(src, row, col, &LAPLACE);
    Color::from_channels(r, g, b)
}

/// Apply Laplace edge detection in place.
///
/// Negative responses clamp to 0. On error the buffer is unchanged.
pub fn apply_laplace<B: PixelBuffer + MaybeSync>(image: &mut B) -> FilterResult<()> {
    debug!(width = image.width(), height = image.height(), "Applying Laplace");
    map_interior(image, "laplace", laplace_at::<B>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Image;

    /// 5x5 image, left two columns black, the rest white.
    fn vertical_edge() -> Image {
        let mut img = Image::new(5, 5);
        for y in 0..5 {
            for x in 2..5 {
                img.set_pixel(y, x, Color::WHITE);
            }
        }
        img
    }

    #[test]
    fn test_sobel_detects_vertical_edge() {
        let mut img = vertical_edge();
        apply_sobel(&mut img).unwrap();

        // gx = -(255 + 2*255 + 255) at the boundary, saturates
        assert_eq!(img.pixel(2, 1), Color::WHITE);
        assert_eq!(img.pixel(2, 2), Color::WHITE);
        // Inside the flat white area there is no gradient
        assert_eq!(img.pixel(2, 3), Color::BLACK);
    }

    #[test]
    fn test_sobel_magnitude_truncates() {
        // Single bright pixel at the top-left neighbor of the center:
        // gx = 10, gy = 10 -> sqrt(200) = 14.14 -> 14
        let mut img = Image::new(3, 3);
        img.set_pixel(0, 0, Color::new(10, 0, 0));
        apply_sobel(&mut img).unwrap();

        assert_eq!(img.pixel(1, 1), Color::new(14, 0, 0));
    }

    #[test]
    fn test_sobel_flat_is_zero() {
        let mut img = Image::filled(4, 4, Color::new(12, 200, 90));
        apply_sobel(&mut img).unwrap();

        assert_eq!(img.pixel(1, 1), Color::BLACK);
        assert_eq!(img.pixel(2, 2), Color::BLACK);
        assert_eq!(img.pixel(0, 0), Color::new(12, 200, 90));
    }

    #[test]
    fn test_sobel_channels_independent() {
        let mut img = Image::new(3, 3);
        for y in 0..3 {
            img.set_pixel(y, 0, Color::new(0, 0, 100));
        }
        apply_sobel(&mut img).unwrap();

        // gx = 100 + 200 + 100 = 400 only on blue
        assert_eq!(img.pixel(1, 1), Color::new(0, 0, 255));
    }

    #[test]
    fn test_laplace_flat_is_zero() {
        let mut img = Image::filled(3, 3, Color::gray(100));
        apply_laplace(&mut img).unwrap();

        assert_eq!(img.pixel(1, 1), Color::BLACK);
        for (y, x) in [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)] {
            assert_eq!(img.pixel(y, x), Color::gray(100));
        }
    }

    #[test]
    fn test_laplace_point_response() {
        let mut img = Image::new(5, 5);
        img.set_pixel(2, 2, Color::gray(50));
        apply_laplace(&mut img).unwrap();

        // 4 * 50 at the point, -50 at its 4-neighbors (clamped to 0)
        assert_eq!(img.pixel(2, 2), Color::gray(200));
        assert_eq!(img.pixel(1, 2), Color::BLACK);
        assert_eq!(img.pixel(2, 1), Color::BLACK);
    }

    #[test]
    fn test_laplace_dark_point_saturates() {
        let mut img = Image::filled(3, 3, Color::WHITE);
        img.set_pixel(1, 1, Color::BLACK);
        apply_laplace(&mut img).unwrap();

        // 0*4 - 4*255 < 0
        assert_eq!(img.pixel(1, 1), Color::BLACK);

        let mut img = Image::filled(3, 3, Color::BLACK);
        img.set_pixel(1, 1, Color::gray(100));
        apply_laplace(&mut img).unwrap();

        // 400 > 255
        assert_eq!(img.pixel(1, 1), Color::WHITE);
    }
}
