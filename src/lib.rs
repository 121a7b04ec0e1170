//! # Barra - Linear Barcode Library
//!
//! Barra turns product and invoice identifiers into printable linear
//! barcodes. It provides:
//!
//! - **Codec**: Code 128, EAN-13, EAN-8, UPC-A and Code 39 encoders with
//!   check-digit arithmetic and input validation
//! - **Rendering**: Rasterization into RGBA images with optional
//!   human-readable text, exported as PNG
//! - **Batch generation**: Parallel label-sheet generation with per-item results
//!
//! ## Quick Start
//!
//! ```no_run
//! use barra::{
//!     Symbology,
//!     codec,
//!     render::{self, RenderOptions},
//! };
//!
//! // Validate and encode
//! let modules = codec::encode("5901234123457", Symbology::Ean13)?;
//! assert_eq!(modules.len(), 95);
//!
//! // Rasterize with a caption under the bars
//! let options = RenderOptions::product();
//! let image = render::render_label(&modules, "5901234123457", &options)?;
//!
//! // Export
//! image.save_png("ean13.png")?;
//!
//! # Ok::<(), barra::BarraError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`symbology`] | Supported barcode standards |
//! | [`codec`] | Tables, checksums, validation and encoding |
//! | [`render`] | Rasterization, captions and PNG export |
//! | [`batch`] | Parallel batch generation |
//! | [`random`] | Random valid codes from an injected RNG |
//! | [`error`] | Error types |
//!
//! Every operation is a pure function of its input: no global state, no I/O
//! outside of the explicit PNG export helpers.

pub mod batch;
pub mod codec;
pub mod error;
pub mod random;
pub mod render;
pub mod symbology;

// Re-exports for convenience
pub use codec::{EncodeRequest, ModuleSequence};
pub use error::{BarraError, EncodeError, RenderError};
pub use render::{RasterImage, RenderOptions};
pub use symbology::Symbology;
