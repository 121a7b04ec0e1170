//! # Label Renderer
//!
//! Bars plus an optional human-readable caption.
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────────────┐  ┬ margin
//! │   █ ██ █ ███ █ ██ █ ██ ███   │  ┼ bar_height
//! │                              │  ┼ text_margin
//! │        5901234123457         │  ┼ font_size (baseline at the bottom)
//! └──────────────────────────────┘  ┴ margin
//! ```
//!
//! The caption is centered horizontally and drawn in the foreground color.

use super::font::{self, Face};
use super::options::RenderOptions;
use super::raster::{RasterImage, blank_canvas, canvas_width, paint_bars};
use crate::codec::ModuleSequence;
use crate::error::RenderError;

/// Render bars and, if `options.display_text` is set, `text` below them.
///
/// Without `display_text` the result is identical to [`rasterize`](super::rasterize).
///
/// ```
/// use barra::{Symbology, codec, render::{self, RenderOptions}};
///
/// let modules = codec::encode("HELLO", Symbology::Code39).unwrap();
/// let opts = RenderOptions::default();
/// let img = render::render_label(&modules, "HELLO", &opts).unwrap();
/// assert_eq!(img.height(), 100 + 2 * 10 + 14 + 2);
/// ```
pub fn render_label(
    modules: &ModuleSequence,
    text: &str,
    options: &RenderOptions,
) -> Result<RasterImage, RenderError> {
    options.validate()?;
    if modules.is_empty() {
        return Err(RenderError::EmptySequence);
    }
    if options.display_text && text.is_empty() {
        return Err(RenderError::EmptyText);
    }

    let width = canvas_width(modules, options)?;
    let height = options.bar_height as u64 + 2 * options.margin as u64 + options.text_band_height() as u64;
    let mut canvas = blank_canvas(width, height, options.background_color)?;
    paint_bars(&mut canvas, modules, options);

    if options.display_text {
        let face = Face::for_size(options.font_size);
        let baseline = options.margin as i64
            + options.bar_height as i64
            + options.font_size as i64
            + options.text_margin as i64;
        let top = baseline - face.height() as i64;
        let left = (width as i64 - font::text_width(text, face) as i64) / 2;
        // Faces taller than font_size are clipped to the text band
        let band = baseline - options.font_size as i64..baseline;
        font::draw_text(
            &mut canvas,
            text,
            (left, top),
            band,
            face,
            options.foreground_color.to_rgba(),
        )?;
    }

    Ok(RasterImage::from_rgba(canvas))
}
