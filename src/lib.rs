//! rasterfx
//!
//! In-place raster filters for 8-bit RGB images plus an undo history that
//! owns buffer snapshots. Python bindings via PyO3 and WASM bindings for
//! JavaScript are available behind feature flags.
//!
//! ## Image Format
//! Buffers are grids of [`Color`] samples addressed by `(row, col)`. The
//! bundled [`Image`] stores them as an `ndarray` array of shape
//! (height, width, 3), u8 per channel.
//!
//! Filters work through the [`PixelBuffer`] trait, so any type providing
//! width/height, pixel get/set and a fallible deep copy can be filtered.
//!
//! ## Filters
//! - [`apply_grayscale`] - pointwise luma conversion
//! - [`apply_sobel`] - per-channel gradient magnitude
//! - [`apply_laplace`] - per-channel 4-neighbor Laplacian
//! - [`apply_composite`] - soft focus, warm shift and vignette
//!
//! Neighborhood filters leave the 1-pixel border untouched.
//!
//! ## Example
//!
//! ```rust
//! use rasterfx::{apply_laplace, Color, History, Image, PixelBuffer};
//!
//! let mut image = Image::filled(3, 3, Color::gray(100));
//! let mut history = History::new();
//! history.push(image.clone()).unwrap();
//!
//! apply_laplace(&mut image).unwrap();
//! assert_eq!(image.pixel(1, 1), Color::BLACK);
//!
//! // undo
//! let image = history.take().unwrap();
//! assert_eq!(image.pixel(1, 1), Color::gray(100));
//! ```

pub mod buffer;
pub mod color;
mod error;
pub mod filters;
pub mod history;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{Image, PixelBuffer};
pub use color::{clamp_channel, Color};
pub use error::{FilterError, FilterResult, HistoryError, HistoryResult};
pub use filters::{
    apply_composite, apply_composite_with, apply_grayscale, apply_grayscale_weighted, apply_laplace,
    apply_sobel, CompositeParams, GrayscaleWeights,
};
pub use history::History;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::buffer::Image;
    use crate::error::FilterError;
    use crate::filters::{self, GrayscaleWeights};

    fn to_py_err(e: FilterError) -> PyErr {
        PyValueError::new_err(e.to_string())
    }

    /// Copy a (height, width, 3) uint8 array into an owned image.
    fn load(image: PyReadonlyArray3<'_, u8>) -> PyResult<Image> {
        Image::from_array(image.as_array().to_owned()).map_err(to_py_err)
    }

    // ========================================================================
    // Grayscale Filter
    // ========================================================================

    /// Convert an RGB u8 image to grayscale (0.30 R + 0.59 G + 0.11 B).
    ///
    /// Returns a new array; the input is not modified.
    #[pyfunction]
    pub fn grayscale<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut img = load(image)?;
        filters::apply_grayscale(&mut img);
        Ok(img.into_array().into_pyarray(py))
    }

    /// Convert an RGB u8 image to grayscale with relative integer weights.
    #[pyfunction]
    #[pyo3(signature = (image, r_weight=30, g_weight=59, b_weight=11))]
    pub fn grayscale_weighted<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        r_weight: u32,
        g_weight: u32,
        b_weight: u32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let weights = GrayscaleWeights::custom(r_weight, g_weight, b_weight).map_err(to_py_err)?;
        let mut img = load(image)?;
        filters::apply_grayscale_weighted(&mut img, weights);
        Ok(img.into_array().into_pyarray(py))
    }

    // ========================================================================
    // Edge Detection Filters
    // ========================================================================

    #[pyfunction]
    pub fn sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut img = load(image)?;
        filters::apply_sobel(&mut img).map_err(to_py_err)?;
        Ok(img.into_array().into_pyarray(py))
    }

    #[pyfunction]
    pub fn laplace<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut img = load(image)?;
        filters::apply_laplace(&mut img).map_err(to_py_err)?;
        Ok(img.into_array().into_pyarray(py))
    }

    // ========================================================================
    // Composite Filter
    // ========================================================================

    /// Soft focus, warm color shift and vignette.
    #[pyfunction]
    pub fn composite<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let mut img = load(image)?;
        filters::apply_composite(&mut img).map_err(to_py_err)?;
        Ok(img.into_array().into_pyarray(py))
    }

    /// rasterfx extension module
    #[pymodule]
    pub fn rasterfx(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(grayscale, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale_weighted, m)?)?;
        m.add_function(wrap_pyfunction!(sobel, m)?)?;
        m.add_function(wrap_pyfunction!(laplace, m)?)?;
        m.add_function(wrap_pyfunction!(composite, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::rasterfx;
