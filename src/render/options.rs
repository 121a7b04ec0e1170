//! # Render Options
//!
//! Geometry and color configuration for rasterizing barcodes.
//!
//! Options deserialize from JSON with every field optional; missing fields
//! take the defaults below.
//!
//! | Field | Default | Constraint |
//! |-------|---------|------------|
//! | `module_width` | 2 px | > 0 |
//! | `bar_height` | 100 px | > 0 |
//! | `margin` | 10 px | |
//! | `display_text` | true | |
//! | `font_size` | 14 px | > 0 when `display_text` |
//! | `text_margin` | 2 px | |
//! | `background_color` | `#ffffff` | |
//! | `foreground_color` | `#000000` | |
//!
//! Invalid values are rejected by [`RenderOptions::validate`], never clamped.
//!
//! ```
//! use barra::render::RenderOptions;
//!
//! let opts: RenderOptions = serde_json::from_str(r#"{"bar_height": 40, "display_text": false}"#).unwrap();
//! assert_eq!(opts.bar_height, 40);
//! assert_eq!(opts.module_width, 2);
//! ```

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// An RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => {
                let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
                Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    pub fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, self.a])
    }
}

impl From<Rgba<u8>> for Color {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Color::rgba(r, g, b, a)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s).ok_or_else(|| format!("invalid hex color '{}'", s))
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(value: Color) -> Self {
        value.to_string()
    }
}

/// Rendering configuration for a barcode image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Width of one module in pixels
    pub module_width: u32,
    /// Bar height in pixels
    pub bar_height: u32,
    /// Quiet zone on every side, in pixels
    pub margin: u32,
    /// Draw the human-readable text under the bars
    pub display_text: bool,
    /// Text size in pixels
    pub font_size: u32,
    /// Gap between bars and text, in pixels
    pub text_margin: u32,
    #[serde(alias = "background")]
    pub background_color: Color,
    #[serde(alias = "line_color")]
    pub foreground_color: Color,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            module_width: 2,
            bar_height: 100,
            margin: 10,
            display_text: true,
            font_size: 14,
            text_margin: 2,
            background_color: Color::WHITE,
            foreground_color: Color::BLACK,
        }
    }
}

impl RenderOptions {
    /// Product barcode: shorter bars, small text.
    pub fn product() -> Self {
        Self {
            bar_height: 60,
            font_size: 12,
            ..Self::default()
        }
    }

    /// Invoice barcode: medium bars, regular text.
    pub fn invoice() -> Self {
        Self {
            bar_height: 80,
            font_size: 14,
            ..Self::default()
        }
    }

    /// Narrow bars without text, for dense label sheets.
    pub fn compact() -> Self {
        Self {
            module_width: 1,
            bar_height: 40,
            display_text: false,
            ..Self::default()
        }
    }

    pub fn module_width(mut self, px: u32) -> Self {
        self.module_width = px;
        self
    }

    pub fn bar_height(mut self, px: u32) -> Self {
        self.bar_height = px;
        self
    }

    pub fn margin(mut self, px: u32) -> Self {
        self.margin = px;
        self
    }

    pub fn display_text(mut self, on: bool) -> Self {
        self.display_text = on;
        self
    }

    pub fn font_size(mut self, px: u32) -> Self {
        self.font_size = px;
        self
    }

    pub fn text_margin(mut self, px: u32) -> Self {
        self.text_margin = px;
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn foreground_color(mut self, color: Color) -> Self {
        self.foreground_color = color;
        self
    }

    /// Reject zero sizes.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.module_width == 0 {
            return Err(RenderError::InvalidOption { name: "module_width" });
        }
        if self.bar_height == 0 {
            return Err(RenderError::InvalidOption { name: "bar_height" });
        }
        if self.display_text && self.font_size == 0 {
            return Err(RenderError::InvalidOption { name: "font_size" });
        }
        Ok(())
    }

    /// Height of the text band below the bars (0 without text).
    pub fn text_band_height(&self) -> u32 {
        if self.display_text {
            self.font_size.saturating_add(self.text_margin)
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_hex() {
        assert_eq!(Color::from_hex("#ffffff"), Some(Color::WHITE));
        assert_eq!(Color::from_hex("000"), Some(Color::BLACK));
        assert_eq!(Color::from_hex("#f80"), Some(Color::rgb(255, 136, 0)));
        assert_eq!(
            Color::from_hex("#11223344"),
            Some(Color::rgba(0x11, 0x22, 0x33, 0x44))
        );
        assert_eq!(Color::from_hex("#12345"), None);
        assert_eq!(Color::from_hex("#gggggg"), None);
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Color::rgb(255, 136, 0).to_string(), "#ff8800");
        assert_eq!(Color::rgba(0, 0, 0, 128).to_string(), "#00000080");
    }

    #[test]
    fn test_defaults() {
        let opts = RenderOptions::default();
        assert_eq!(opts.module_width, 2);
        assert_eq!(opts.bar_height, 100);
        assert_eq!(opts.margin, 10);
        assert!(opts.display_text);
        assert_eq!(opts.text_band_height(), 16);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sizes() {
        let err = RenderOptions::default().module_width(0).validate();
        assert_eq!(err, Err(RenderError::InvalidOption { name: "module_width" }));

        let err = RenderOptions::default().bar_height(0).validate();
        assert_eq!(err, Err(RenderError::InvalidOption { name: "bar_height" }));

        let err = RenderOptions::default().font_size(0).validate();
        assert_eq!(err, Err(RenderError::InvalidOption { name: "font_size" }));

        // Font size is irrelevant without text
        assert!(RenderOptions::default().display_text(false).font_size(0).validate().is_ok());
        // Zero margin is allowed
        assert!(RenderOptions::default().margin(0).validate().is_ok());
    }

    #[test]
    fn test_json_partial_and_aliases() {
        let opts: RenderOptions = serde_json::from_str(
            r##"{"module_width": 3, "background": "#eeeeee", "line_color": "#112233"}"##,
        )
        .unwrap();
        assert_eq!(opts.module_width, 3);
        assert_eq!(opts.bar_height, 100);
        assert_eq!(opts.background_color, Color::rgb(0xee, 0xee, 0xee));
        assert_eq!(opts.foreground_color, Color::rgb(0x11, 0x22, 0x33));

        assert!(serde_json::from_str::<RenderOptions>(r#"{"foreground_color": "red"}"#).is_err());
    }

    #[test]
    fn test_presets() {
        assert_eq!(RenderOptions::product().bar_height, 60);
        assert_eq!(RenderOptions::invoice().bar_height, 80);
        assert!(!RenderOptions::compact().display_text);
        assert_eq!(RenderOptions::compact().text_band_height(), 0);
    }
}
