//! RGBA color value used by the block reducer.

/// RGBA color with floating-point channels.
///
/// Colors read from a pixel buffer hold whole numbers in `0.0..=255.0`.
/// Averages may be fractional (`(255 + 0) / 2 = 127.5`) and stay that way
/// until [`Rgba::to_bytes`] writes them back into a buffer. Every value the
/// reducer produces is a multiple of 0.25, which `f32` represents exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Creates a color from raw channel values.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from one RGBA8 pixel.
    #[inline]
    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self {
            r: px[0] as f32,
            g: px[1] as f32,
            b: px[2] as f32,
            a: px[3] as f32,
        }
    }

    /// Two colors match when all four channels are equal.
    #[inline]
    pub fn matches(&self, other: &Self) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b && self.a == other.a
    }

    /// Componentwise arithmetic mean, without rounding.
    #[inline]
    pub fn average_with(self, other: Self) -> Self {
        Self {
            r: (self.r + other.r) / 2.0,
            g: (self.g + other.g) / 2.0,
            b: (self.b + other.b) / 2.0,
            a: (self.a + other.a) / 2.0,
        }
    }

    /// Converts back to an RGBA8 pixel.
    ///
    /// This is the only place channels are rounded: half-way values go to
    /// the nearest even integer, then the result is clamped to `0..=255`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            quantize(self.r),
            quantize(self.g),
            quantize(self.b),
            quantize(self.a),
        ]
    }
}

impl From<[u8; 4]> for Rgba {
    fn from(px: [u8; 4]) -> Self {
        Self::from_bytes(px)
    }
}

#[inline]
fn quantize(channel: f32) -> u8 {
    channel.round_ties_even().clamp(0.0, 255.0) as u8
}
