//! WebAssembly exports for rasterfx filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images are
//! passed as flat RGB byte arrays (length = width * height * 3) and a new
//! array is returned.

use wasm_bindgen::prelude::*;

use crate::buffer::Image;
use crate::error::FilterResult;
use crate::filters;

fn run(
    data: &[u8],
    width: usize,
    height: usize,
    filter: impl FnOnce(&mut Image) -> FilterResult<()>,
) -> Result<Vec<u8>, JsError> {
    let mut img = Image::from_raw_rgb(width, height, data.to_vec())
        .map_err(|e| JsError::new(&e.to_string()))?;
    filter(&mut img).map_err(|e| JsError::new(&e.to_string()))?;
    Ok(img.into_raw_rgb())
}

/// Convert an RGB image to grayscale (0.30 R + 0.59 G + 0.11 B).
#[wasm_bindgen]
pub fn grayscale_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, |img| {
        filters::apply_grayscale(img);
        Ok(())
    })
}

/// Per-channel Sobel gradient magnitude.
#[wasm_bindgen]
pub fn sobel_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, filters::apply_sobel::<Image>)
}

/// Per-channel 4-neighbor Laplacian.
#[wasm_bindgen]
pub fn laplace_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, filters::apply_laplace::<Image>)
}

/// Soft focus, warm color shift and vignette.
#[wasm_bindgen]
pub fn composite_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, filters::apply_composite::<Image>)
}
