//! # Rasterizer
//!
//! Paints a module sequence into a freshly allocated RGBA8 buffer.
//!
//! ## Geometry
//!
//! ```text
//! ├ margin ┼──── modules × module_width ────┼ margin ┤
//! ┬
//! margin
//! ┼        █ ██ █  ███ █ ██  █ ██ ███ █ █
//! bar      █ ██ █  ███ █ ██  █ ██ ███ █ █
//! height   █ ██ █  ███ █ ██  █ ██ ███ █ █
//! ┼
//! margin
//! ┴
//! ```
//!
//! Every call allocates its own image; nothing is cached between calls.

use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbaImage};

use super::options::{Color, RenderOptions};
use crate::codec::ModuleSequence;
use crate::error::RenderError;

/// An RGBA8 pixel buffer owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: RgbaImage,
}

impl RasterImage {
    pub(crate) fn from_rgba(pixels: RgbaImage) -> Self {
        Self { pixels }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Color at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixels.get_pixel_checked(x, y).map(|&px| Color::from(px))
    }

    /// Raw RGBA bytes, row-major.
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.pixels
    }

    pub fn into_rgba(self) -> RgbaImage {
        self.pixels
    }

    /// Encode as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>, RenderError> {
        let mut png_bytes = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| RenderError::Image(format!("PNG encoding failed: {}", e)))?;
        Ok(png_bytes)
    }

    /// Write a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let path = path.as_ref();
        self.pixels
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| RenderError::Image(format!("Failed to save {}: {}", path.display(), e)))
    }
}

/// Pixel width of the barcode for `modules` under `options`.
pub(crate) fn canvas_width(modules: &ModuleSequence, options: &RenderOptions) -> Result<u32, RenderError> {
    let width = modules.len() as u64 * options.module_width as u64 + 2 * options.margin as u64;
    u32::try_from(width).map_err(|_| RenderError::TooLarge {
        width,
        height: options.bar_height as u64,
    })
}

/// Allocate a background-filled canvas, checking dimensions.
pub(crate) fn blank_canvas(width: u32, height: u64, background: Color) -> Result<RgbaImage, RenderError> {
    let height = u32::try_from(height).map_err(|_| RenderError::TooLarge {
        width: width as u64,
        height,
    })?;
    if (width as u64) * (height as u64) * 4 > isize::MAX as u64 {
        return Err(RenderError::TooLarge {
            width: width as u64,
            height: height as u64,
        });
    }
    Ok(RgbaImage::from_pixel(width, height, background.to_rgba()))
}

/// Paint bar modules left to right starting at `(margin, margin)`.
pub(crate) fn paint_bars(canvas: &mut RgbaImage, modules: &ModuleSequence, options: &RenderOptions) {
    let ink = options.foreground_color.to_rgba();
    let top = options.margin;
    let bottom = (top + options.bar_height).min(canvas.height());

    let mut x = options.margin;
    for bar in modules.iter() {
        if bar {
            let right = (x + options.module_width).min(canvas.width());
            for py in top..bottom {
                for px in x..right {
                    canvas.put_pixel(px, py, ink);
                }
            }
        }
        x += options.module_width;
    }
}

/// Rasterize bars only (no text band).
///
/// Output is `modules × module_width + 2 × margin` wide and
/// `bar_height + 2 × margin` tall.
///
/// ```
/// use barra::{Symbology, codec, render::{self, RenderOptions}};
///
/// let modules = codec::encode("96385074", Symbology::Ean8).unwrap();
/// let opts = RenderOptions::default().module_width(3).margin(5);
/// let img = render::rasterize(&modules, &opts).unwrap();
/// assert_eq!(img.width(), 67 * 3 + 10);
/// ```
pub fn rasterize(modules: &ModuleSequence, options: &RenderOptions) -> Result<RasterImage, RenderError> {
    options.validate()?;
    if modules.is_empty() {
        return Err(RenderError::EmptySequence);
    }

    let width = canvas_width(modules, options)?;
    let height = options.bar_height as u64 + 2 * options.margin as u64;
    let mut canvas = blank_canvas(width, height, options.background_color)?;
    paint_bars(&mut canvas, modules, options);
    Ok(RasterImage::from_rgba(canvas))
}
