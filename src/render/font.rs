//! Bitmap text for human-readable barcode captions.
//!
//! Uses the Spleen bitmap font family. Three faces are available; the largest
//! one that fits the requested pixel size is used.

use std::ops::Range;

use image::{Rgba, RgbaImage};
use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use crate::error::RenderError;

/// A Spleen face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    /// 6x12
    Small,
    /// 8x16
    Medium,
    /// 12x24
    Large,
}

impl Face {
    /// Largest face no taller than `size_px`, or the smallest face.
    pub fn for_size(size_px: u32) -> Face {
        [Face::Large, Face::Medium, Face::Small]
            .into_iter()
            .find(|face| face.height() <= size_px)
            .unwrap_or(Face::Small)
    }

    pub fn width(self) -> u32 {
        match self {
            Face::Small => 6,
            Face::Medium => 8,
            Face::Large => 12,
        }
    }

    pub fn height(self) -> u32 {
        match self {
            Face::Small => 12,
            Face::Medium => 16,
            Face::Large => 24,
        }
    }

    fn data(self) -> &'static [u8] {
        match self {
            Face::Small => FONT_6X12,
            Face::Medium => FONT_8X16,
            Face::Large => FONT_12X24,
        }
    }
}

/// Width in pixels of `text` set in `face`.
pub fn text_width(text: &str, face: Face) -> u64 {
    text.chars().count() as u64 * face.width() as u64
}

/// Draw `text` with its glyph cells' top-left corner at `(x, y)`.
///
/// Only rows in `rows` are painted; pixels outside those rows or the canvas
/// are dropped. Characters missing from the font advance the cursor without
/// painting.
pub fn draw_text(
    canvas: &mut RgbaImage,
    text: &str,
    (x, y): (i64, i64),
    rows: Range<i64>,
    face: Face,
    ink: Rgba<u8>,
) -> Result<(), RenderError> {
    let mut font = PSF2Font::new(face.data())
        .map_err(|_| RenderError::Font(format!("failed to load {}x{} face", face.width(), face.height())))?;

    let w = canvas.width() as i64;
    let rows = rows.start.max(0)..rows.end.min(canvas.height() as i64);
    let mut cursor_x = x;
    for ch in text.chars() {
        let utf8 = ch.to_string();
        if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
            for (row_y, row) in glyph.enumerate() {
                let py = y + row_y as i64;
                for (col_x, on) in row.enumerate() {
                    let px = cursor_x + col_x as i64;
                    if on && (0..w).contains(&px) && rows.contains(&py) {
                        canvas.put_pixel(px as u32, py as u32, ink);
                    }
                }
            }
        }
        cursor_x += face.width() as i64;
    }
    Ok(())
}
