use rasterfx::{Color, FilterError, FilterResult, Image, PixelBuffer};

/// Deterministic noisy RGB image (xorshift), covers the full 0-255 range.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> Image {
    let mut state = seed.max(1);
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state >> 24) as u8
    };

    let mut img = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(y, x, Color::new(next(), next(), next()));
        }
    }
    img
}

/// High-contrast checkerboard in two colors.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> Image {
    assert!(cell > 0, "cell size must be positive");

    let mut img = Image::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let val = if (x / cell + y / cell) & 1 == 0 {
                Color::new(32, 200, 16)
            } else {
                Color::new(220, 10, 240)
            };
            img.set_pixel(y, x, val);
        }
    }
    img
}

/// Pixels on the outermost row/column ring, in row-major order.
pub fn border(img: &Image) -> Vec<Color> {
    let (w, h) = (img.width(), img.height());
    let mut out = Vec::new();
    for y in 0..h {
        for x in 0..w {
            if y == 0 || x == 0 || y + 1 == h || x + 1 == w {
                out.push(img.pixel(y, x));
            }
        }
    }
    out
}

/// Buffer whose snapshot always fails, as if storage were exhausted.
#[derive(Debug)]
pub struct NoSnapshot(pub Image);

impl PixelBuffer for NoSnapshot {
    fn width(&self) -> usize {
        self.0.width()
    }

    fn height(&self) -> usize {
        self.0.height()
    }

    fn pixel(&self, row: usize, col: usize) -> Color {
        self.0.pixel(row, col)
    }

    fn set_pixel(&mut self, row: usize, col: usize, color: Color) {
        self.0.set_pixel(row, col, color)
    }

    fn try_clone(&self) -> FilterResult<Self> {
        Err(FilterError::Allocation {
            bytes: self.width() * self.height() * 3,
        })
    }
}
