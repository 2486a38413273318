//! Raster scanning: walks an RGBA8 image in 2x2 steps and reduces each block.

use crate::block::{reduce_block, BlockCorners};
use crate::color::Rgba;
use crate::error::InvalidInput;
use crate::geom::{Coord, Resolution};

/// Row-major RGBA8 pixel buffer whose length matches its resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    data: Vec<u8>,
    resolution: Resolution,
}

impl PixelBuffer {
    /// Wrap `data` as a `width` x `height` image.
    ///
    /// Fails if `data` is not exactly `width * height * 4` bytes long.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, InvalidInput> {
        let resolution = Resolution::new(width, height);
        check_len(data.len(), resolution)?;
        Ok(Self { data, resolution })
    }

    /// Zero-filled (transparent black) image.
    #[cfg(test)]
    pub(crate) fn blank(width: u32, height: u32) -> Result<Self, InvalidInput> {
        let resolution = Resolution::new(width, height);
        let len = resolution
            .byte_len()
            .ok_or(InvalidInput::DimensionsOverflow { width, height })?;
        Ok(Self {
            data: vec![0; len],
            resolution,
        })
    }

    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw RGBA8 bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Color of the pixel at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` lies outside the image.
    #[inline]
    pub fn pixel(&self, pos: Coord) -> Rgba {
        rgba_at(&self.data, self.offset(pos))
    }

    /// Overwrite the pixel at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` lies outside the image.
    #[cfg(test)]
    pub(crate) fn set_pixel(&mut self, pos: Coord, px: [u8; 4]) {
        let idx = self.offset(pos);
        self.data[idx..idx + 4].copy_from_slice(&px);
    }

    #[inline]
    fn offset(&self, pos: Coord) -> usize {
        assert!(
            pos.x < self.resolution.width && pos.y < self.resolution.height,
            "pixel ({}, {}) outside {} image",
            pos.x,
            pos.y,
            self.resolution
        );
        (pos.y as usize * self.resolution.width as usize + pos.x as usize) * 4
    }
}

#[inline]
fn rgba_at(data: &[u8], idx: usize) -> Rgba {
    Rgba::from_bytes([data[idx], data[idx + 1], data[idx + 2], data[idx + 3]])
}

fn check_len(actual: usize, resolution: Resolution) -> Result<(), InvalidInput> {
    let expected = resolution.byte_len().ok_or(InvalidInput::DimensionsOverflow {
        width: resolution.width,
        height: resolution.height,
    })?;
    if actual != expected {
        return Err(InvalidInput::LengthMismatch {
            width: resolution.width,
            height: resolution.height,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Halve an RGBA8 image given as a raw byte slice.
///
/// `src` must hold exactly `width * height * 4` bytes. The output is
/// `width / 2` x `height / 2`; a trailing odd row or column is never read.
/// Images narrower or shorter than two pixels produce an empty buffer.
///
/// # Example
/// ```
/// use block_downscale::raster::downscale;
///
/// let src = vec![255u8; 4 * 4 * 4];
/// let out = downscale(&src, 4, 4).unwrap();
/// assert_eq!((out.width(), out.height()), (2, 2));
/// assert_eq!(out.as_bytes(), &[255u8; 16][..]);
/// ```
pub fn downscale(src: &[u8], width: u32, height: u32) -> Result<PixelBuffer, InvalidInput> {
    let resolution = Resolution::new(width, height);
    check_len(src.len(), resolution)?;
    let row = width as usize;
    let mut data = Vec::new();
    let out = scan(
        resolution,
        |pos| rgba_at(src, (pos.y as usize * row + pos.x as usize) * 4),
        &mut data,
    );
    Ok(PixelBuffer {
        data,
        resolution: out,
    })
}

/// Halve a validated image.
pub fn downscale_image(src: &PixelBuffer) -> PixelBuffer {
    let mut data = Vec::new();
    let resolution = downscale_into(src, &mut data);
    PixelBuffer { data, resolution }
}

/// Halve `src` into an existing buffer to avoid allocation.
///
/// `buffer` is cleared first. Returns the resolution of the written image.
pub fn downscale_into(src: &PixelBuffer, buffer: &mut Vec<u8>) -> Resolution {
    scan(src.resolution, |pos| src.pixel(pos), buffer)
}

/// Reduce every whole 2x2 block of a `resolution` sized image, reading
/// source pixels through `read`.
fn scan(
    resolution: Resolution,
    read: impl Fn(Coord) -> Rgba,
    buffer: &mut Vec<u8>,
) -> Resolution {
    buffer.clear();

    let out = resolution.halved();
    if out.is_empty() {
        return out;
    }

    // Output is written in row-major order, so pushing yields offset
    // (y * out.width + x) * 4 for each block.
    buffer.reserve(out.width as usize * out.height as usize * 4);
    for by in 0..out.height {
        for bx in 0..out.width {
            let corners = BlockCorners::of_block(Coord::new(bx, by)).to_array();
            let color = reduce_block(corners.map(&read));
            buffer.extend_from_slice(&color.to_bytes());
        }
    }

    out
}
