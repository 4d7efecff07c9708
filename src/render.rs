//! # Raster Rendering
//!
//! Turns a [`PackedSymbol`] into pixels. The encoder deliberately stops
//! at the packed transport form; this module is the reference consumer
//! of that contract, reading modules back out of the packed words and
//! drawing them as black columns on white.
//!
//! The encoder emits no quiet zone, so callers that want scannable
//! output should ask for one here via [`RenderOptions::quiet_zone`].
//!
//! ## Usage
//!
//! ```
//! use barras::RenderOptions;
//!
//! let symbol = barras::encode("96385074")?;
//! let png = barras::render::render_png(&symbol.pack(), &RenderOptions::default())?;
//! assert_eq!(&png[..4], b"\x89PNG");
//! # Ok::<(), barras::BarrasError>(())
//! ```

use image::{GrayImage, Luma};
use thiserror::Error;

use crate::modules::PackedSymbol;

/// Errors that can occur while rasterizing a symbol.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Image encoding error: {0}")]
    ImageEncode(String),
}

/// Rasterization options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Pixels per module, both axes. Values below 1 are treated as 1.
    pub scale: u32,
    /// Quiet zone width on each side, in modules.
    pub quiet_zone: u32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            quiet_zone: 0,
        }
    }
}

/// Draw `symbol` as a grayscale image, bars black on a white field.
pub fn render_image(symbol: &PackedSymbol, options: &RenderOptions) -> GrayImage {
    let scale = options.scale.max(1);
    let img_width = (symbol.width as u32 + 2 * options.quiet_zone) * scale;
    let img_height = symbol.height as u32 * scale;

    let mut img = GrayImage::from_pixel(img_width, img_height, Luma([255u8]));

    for i in 0..symbol.width {
        if !symbol.module(i) {
            continue;
        }
        let start_x = (options.quiet_zone + i as u32) * scale;
        for x in start_x..start_x + scale {
            for y in 0..img_height {
                img.put_pixel(x, y, Luma([0u8]));
            }
        }
    }

    img
}

/// Render `symbol` to PNG bytes.
pub fn render_png(symbol: &PackedSymbol, options: &RenderOptions) -> Result<Vec<u8>, RenderError> {
    use image::ImageEncoder;

    let img = render_image(symbol, options);

    let mut png_bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut png_bytes);
    encoder
        .write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::L8,
        )
        .map_err(|e: image::ImageError| RenderError::ImageEncode(e.to_string()))?;

    Ok(png_bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::SYMBOL_HEIGHT;

    fn packed(bits: &[bool]) -> PackedSymbol {
        let mut words = vec![0u32; bits.len().div_ceil(24)];
        for (i, &bar) in bits.iter().enumerate() {
            if bar {
                words[i / 24] |= 1 << (i % 24);
            }
        }
        PackedSymbol {
            width: bits.len(),
            height: SYMBOL_HEIGHT,
            word_bits: 24,
            words,
        }
    }

    #[test]
    fn test_image_geometry_follows_options() {
        let symbol = packed(&[true, false, true]);
        let img = render_image(
            &symbol,
            &RenderOptions {
                scale: 3,
                quiet_zone: 2,
            },
        );
        assert_eq!(img.width(), (3 + 4) * 3);
        assert_eq!(img.height(), SYMBOL_HEIGHT as u32 * 3);
    }

    #[test]
    fn test_bars_are_black_and_spaces_white() {
        let symbol = packed(&[true, false, true]);
        let img = render_image(
            &symbol,
            &RenderOptions {
                scale: 1,
                quiet_zone: 1,
            },
        );
        assert_eq!(img.get_pixel(0, 0).0[0], 255); // quiet zone
        assert_eq!(img.get_pixel(1, 0).0[0], 0); // bar
        assert_eq!(img.get_pixel(2, 0).0[0], 255); // space
        assert_eq!(img.get_pixel(3, 0).0[0], 0); // bar
        assert_eq!(img.get_pixel(4, 0).0[0], 255); // quiet zone

        // Columns are solid top to bottom.
        assert_eq!(img.get_pixel(1, img.height() - 1).0[0], 0);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let symbol = packed(&[true]);
        let img = render_image(
            &symbol,
            &RenderOptions {
                scale: 0,
                quiet_zone: 0,
            },
        );
        assert_eq!(img.width(), 1);
        assert_eq!(img.get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn test_png_output_has_the_magic_header() {
        let symbol = packed(&[true, false, true]);
        let png = render_png(&symbol, &RenderOptions::default()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }
}
