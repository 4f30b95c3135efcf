//! Shared machinery for the neighborhood filters.
//!
//! - 3x3 kernel convolution over a snapshot
//! - the interior pass: snapshot, compute, write back, drop snapshot
//!
//! Neighborhood filters read from an immutable snapshot taken with
//! [`PixelBuffer::try_clone`] and write into the live buffer, so a pass
//! never observes its own output. Only interior pixels are visited; the
//! outermost row and column on each side keep their original values.

use tracing::{trace, warn};

use crate::buffer::PixelBuffer;
use crate::color::Color;
use crate::error::FilterResult;

/// 3x3 integer convolution kernel, indexed `[row][col]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Thread-safety bound for buffers and per-pixel closures.
///
/// Resolves to `Sync` when the `parallel` feature is on and to nothing
/// otherwise, so serial builds accept any buffer.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}
#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}
#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}

/// Per-channel weighted sum of the 3x3 neighborhood centered on `(row, col)`.
///
/// Caller guarantees `(row, col)` is an interior coordinate.
#[inline]
pub fn convolve3<B: PixelBuffer>(src: &B, row: usize, col: usize, kernel: &Kernel3) -> [i32; 3] {
    let mut sum = [0i32; 3];
    for (ky, weights) in kernel.iter().enumerate() {
        for (kx, &w) in weights.iter().enumerate() {
            if w == 0 {
                continue;
            }
            let px = src.pixel(row + ky - 1, col + kx - 1);
            sum[0] += px.r as i32 * w;
            sum[1] += px.g as i32 * w;
            sum[2] += px.b as i32 * w;
        }
    }
    sum
}

/// Rewrite every interior pixel of `image` with `f(snapshot, row, col)`.
///
/// Buffers smaller than 3x3 have no interior and are left untouched
/// without taking a snapshot. When the snapshot cannot be allocated the
/// error is returned before any pixel is written.
pub fn map_interior<B, F>(image: &mut B, name: &'static str, f: F) -> FilterResult<()>
where
    B: PixelBuffer + MaybeSync,
    F: Fn(&B, usize, usize) -> Color + MaybeSync,
{
    let (width, height) = (image.width(), image.height());
    trace!(filter = name, width, height, "interior pass");

    if width < 3 || height < 3 {
        return Ok(());
    }

    let snapshot = image.try_clone().map_err(|e| {
        warn!(filter = name, width, height, error = %e, "snapshot failed, image left unmodified");
        e
    })?;

    write_interior(image, &snapshot, width, height, &f);
    Ok(())
}

#[cfg(not(feature = "parallel"))]
fn write_interior<B, F>(image: &mut B, snapshot: &B, width: usize, height: usize, f: &F)
where
    B: PixelBuffer,
    F: Fn(&B, usize, usize) -> Color,
{
    for row in 1..height - 1 {
        for col in 1..width - 1 {
            image.set_pixel(row, col, f(snapshot, row, col));
        }
    }
}

#[cfg(feature = "parallel")]
fn write_interior<B, F>(image: &mut B, snapshot: &B, width: usize, height: usize, f: &F)
where
    B: PixelBuffer + Sync,
    F: Fn(&B, usize, usize) -> Color + Sync,
{
    use rayon::prelude::*;

    let rows: Vec<Vec<Color>> = (1..height - 1)
        .into_par_iter()
        .map(|row| (1..width - 1).map(|col| f(snapshot, row, col)).collect())
        .collect();

    for (row, colors) in (1..height - 1).zip(rows) {
        for (col, color) in (1..width - 1).zip(colors) {
            image.set_pixel(row, col, color);
        }
    }
}
