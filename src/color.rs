//! RGB color value and channel clamping.

/// An 8-bit RGB sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color with all three channels set to `v`.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Build a color from wide per-channel intensities, clamping each one.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        c.to_array()
    }
}

/// Map any intensity onto the valid channel range `[0, 255]`.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Truncate toward zero, then clamp. NaN maps to 0.
#[inline]
pub fn clamp_channel_f64(value: f64) -> u8 {
    // `as` saturates on overflow and maps NaN to 0
    clamp_channel(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_channel_bounds() {
        assert_eq!(clamp_channel(-1), 0);
        assert_eq!(clamp_channel(i32::MIN), 0);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(256), 255);
        assert_eq!(clamp_channel(i32::MAX), 255);
    }

    #[test]
    fn test_clamp_channel_f64_truncates() {
        assert_eq!(clamp_channel_f64(76.99), 76);
        assert_eq!(clamp_channel_f64(-0.5), 0);
        assert_eq!(clamp_channel_f64(300.2), 255);
        assert_eq!(clamp_channel_f64(f64::NAN), 0);
    }

    #[test]
    fn test_from_channels_clamps_each() {
        let c = Color::from_channels(-20, 100, 999);
        assert_eq!(c, Color::new(0, 100, 255));
    }

    #[test]
    fn test_array_conversion() {
        let c: Color = [1, 2, 3].into();
        assert_eq!(c, Color::new(1, 2, 3));
        let a: [u8; 3] = c.into();
        assert_eq!(a, [1, 2, 3]);
    }
}
