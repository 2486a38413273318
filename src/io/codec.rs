//! PNG encoding and raster decoding through the `image` crate.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::{LoadError, SaveError};
use crate::raster::PixelBuffer;

/// Decode an encoded image into an RGBA8 buffer.
///
/// The format (PNG, JPEG, GIF, BMP or WebP) is guessed from the content.
/// Non-RGBA images are converted, so grayscale or RGB sources come out with
/// an opaque alpha channel.
pub fn decode(bytes: &[u8], origin: &str) -> Result<PixelBuffer, LoadError> {
    let rgba = image::load_from_memory(bytes)
        .map_err(|source| LoadError::Decode {
            origin: origin.to_string(),
            source,
        })?
        .into_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {}x{} image from {}", width, height, origin);

    PixelBuffer::new(rgba.into_raw(), width, height).map_err(|source| LoadError::Malformed {
        origin: origin.to_string(),
        source,
    })
}

/// Encode an RGBA8 buffer as PNG.
pub fn encode_png(image: &PixelBuffer, target: &str) -> Result<Vec<u8>, SaveError> {
    if image.resolution().is_empty() {
        return Err(SaveError::EmptyImage {
            target: target.to_string(),
            width: image.width(),
            height: image.height(),
        });
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png)
        .write_image(
            image.as_bytes(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| SaveError::Encode {
            target: target.to_string(),
            source,
        })?;
    log::debug!("Encoded {} PNG ({} bytes) for {}", image.resolution(), png.len(), target);
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let pixels: Vec<u8> = (0..2 * 3 * 4).map(|v| (v * 10) as u8).collect();
        let image = PixelBuffer::new(pixels, 2, 3).unwrap();
        let png = encode_png(&image, "memory").unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
        assert_eq!(decode(&png, "memory").unwrap(), image);
    }

    #[test]
    fn test_bmp_decodes_by_content() {
        let mut bmp = Vec::new();
        image::RgbImage::from_pixel(2, 2, image::Rgb([10, 20, 30]))
            .write_to(&mut std::io::Cursor::new(&mut bmp), image::ImageFormat::Bmp)
            .unwrap();
        assert_eq!(&bmp[..2], b"BM");

        let image = decode(&bmp, "upload").unwrap();
        assert_eq!(image.resolution(), crate::geom::Resolution::new(2, 2));
        assert_eq!(image.as_bytes(), &[10u8, 20, 30, 255].repeat(4)[..]);
    }

    #[test]
    fn test_empty_image_is_refused() {
        let image = PixelBuffer::new(Vec::new(), 0, 3).unwrap();
        let err = encode_png(&image, "out.png").unwrap_err();
        assert!(matches!(err, SaveError::EmptyImage { width: 0, height: 3, .. }));
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let err = decode(b"definitely not an image", "garbage").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
        assert!(err.to_string().contains("garbage"));
    }
}
