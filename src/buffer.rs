//! Pixel buffer contract and the ndarray-backed [`Image`].
//!
//! Filters only talk to buffers through [`PixelBuffer`]. [`Image`] stores
//! pixels as an `Array3<u8>` of shape (height, width, 3), the same layout
//! the numpy and WASM bindings exchange.

use ndarray::{Array3, ArrayView3};

use crate::color::Color;
use crate::error::{FilterError, FilterResult};

/// Number of interleaved channels per pixel.
pub const CHANNELS: usize = 3;

/// Read/write access to a fixed-size grid of [`Color`] samples.
///
/// Width and height are constant for the buffer's lifetime. Coordinates
/// are `(row, col)` with `row < height()` and `col < width()`.
pub trait PixelBuffer {
    fn width(&self) -> usize;
    fn height(&self) -> usize;

    /// Color at `(row, col)`.
    fn pixel(&self, row: usize, col: usize) -> Color;

    /// Overwrite a single pixel in place.
    fn set_pixel(&mut self, row: usize, col: usize, color: Color);

    /// Independent deep copy with the same dimensions and content.
    ///
    /// Returns [`FilterError::Allocation`] instead of aborting when the
    /// storage cannot be reserved.
    fn try_clone(&self) -> FilterResult<Self>
    where
        Self: Sized;
}

/// Owned RGB8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    data: Array3<u8>,
}

impl Image {
    /// Black image of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::zeros((height, width, CHANNELS)),
        }
    }

    /// Image with every pixel set to `color`.
    pub fn filled(width: usize, height: usize, color: Color) -> Self {
        let mut data = Array3::zeros((height, width, CHANNELS));
        for mut px in data.lanes_mut(ndarray::Axis(2)) {
            px[0] = color.r;
            px[1] = color.g;
            px[2] = color.b;
        }
        Self { data }
    }

    /// Wrap an existing (height, width, 3) array.
    pub fn from_array(data: Array3<u8>) -> FilterResult<Self> {
        let (_, _, channels) = data.dim();
        if channels != CHANNELS {
            return Err(FilterError::InvalidDimensions(format!(
                "expected {} channels, got {}",
                CHANNELS, channels
            )));
        }
        Ok(Self { data })
    }

    /// Build from a flat interleaved RGB byte vector.
    pub fn from_raw_rgb(width: usize, height: usize, raw: Vec<u8>) -> FilterResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(CHANNELS))
            .ok_or_else(|| FilterError::InvalidDimensions("image dimensions overflow".into()))?;
        if raw.len() != expected {
            return Err(FilterError::InvalidDimensions(format!(
                "expected {} bytes for {}x{} RGB, got {}",
                expected,
                width,
                height,
                raw.len()
            )));
        }
        let data = Array3::from_shape_vec((height, width, CHANNELS), raw)?;
        Ok(Self { data })
    }

    pub fn as_array(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Flat interleaved RGB bytes in row-major order.
    pub fn into_raw_rgb(self) -> Vec<u8> {
        if !self.data.is_standard_layout() {
            return self.data.iter().copied().collect();
        }
        let len = self.data.len();
        // A sliced array keeps the dropped elements in its backing vec
        match self.data.into_raw_vec_and_offset() {
            (raw, Some(0)) if raw.len() == len => raw,
            (raw, Some(offset)) => raw
                .get(offset..offset + len)
                .map(<[u8]>::to_vec)
                .unwrap_or_default(),
            (_, None) => Vec::new(),
        }
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.data
            .lanes(ndarray::Axis(2))
            .into_iter()
            .map(|px| Color::new(px[0], px[1], px[2]))
    }
}

impl PixelBuffer for Image {
    fn width(&self) -> usize {
        self.data.dim().1
    }

    fn height(&self) -> usize {
        self.data.dim().0
    }

    #[inline]
    fn pixel(&self, row: usize, col: usize) -> Color {
        Color::new(
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        )
    }

    #[inline]
    fn set_pixel(&mut self, row: usize, col: usize, color: Color) {
        self.data[[row, col, 0]] = color.r;
        self.data[[row, col, 1]] = color.g;
        self.data[[row, col, 2]] = color.b;
    }

    fn try_clone(&self) -> FilterResult<Self> {
        let bytes = self.data.len();
        let mut raw = Vec::new();
        raw.try_reserve_exact(bytes)
            .map_err(|_| FilterError::Allocation { bytes })?;
        raw.extend(self.data.iter().copied());
        let data = Array3::from_shape_vec(self.data.raw_dim(), raw)?;
        Ok(Self { data })
    }
}
