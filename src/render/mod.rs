//! # Rendering Module
//!
//! Turns module sequences into printable images.
//!
//! ## Modules
//!
//! - [`options`]: Geometry and color configuration
//! - [`raster`]: Bars-only rasterization and PNG export
//! - [`label`]: Bars plus human-readable caption
//!
//! ## Usage Example
//!
//! ```
//! use barra::{Symbology, codec, render::{self, RenderOptions}};
//!
//! let modules = codec::encode("Invoice-1042", Symbology::Code128).unwrap();
//! let image = render::render_label(&modules, "Invoice-1042", &RenderOptions::invoice()).unwrap();
//!
//! // PNG bytes ready for download or printing
//! let png = image.to_png().unwrap();
//! assert!(!png.is_empty());
//! ```

mod font;
pub mod label;
pub mod options;
pub mod raster;

pub use label::render_label;
pub use options::{Color, RenderOptions};
pub use raster::{RasterImage, rasterize};
