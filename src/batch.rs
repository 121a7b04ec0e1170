//! # Batch Generation
//!
//! Encode and render many barcodes at once, e.g. for a label sheet.
//!
//! Items are independent, so the batch fans out over rayon's thread pool.
//! Results come back in input order, one per request; a failing item never
//! aborts the others.
//!
//! ## Example
//!
//! ```
//! use barra::{EncodeRequest, Symbology, batch, render::RenderOptions};
//!
//! let requests = vec![
//!     EncodeRequest::new("5901234123457", Symbology::Ean13),
//!     EncodeRequest::new("not valid!", Symbology::Code39),
//!     EncodeRequest::new("SKU-1", Symbology::Code128),
//! ];
//! let results = batch::generate_batch(&requests, &RenderOptions::default());
//! assert!(results[0].is_ok());
//! assert!(results[1].is_err());
//! assert!(results[2].is_ok());
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::debug;

use crate::codec::{EncodeRequest, Encoder};
use crate::error::BarraError;
use crate::render::{RasterImage, RenderOptions, render_label};

/// Encode and render a single request.
pub fn generate(request: &EncodeRequest, options: &RenderOptions) -> Result<RasterImage, BarraError> {
    generate_with(&Encoder::default(), request, options)
}

fn generate_with(
    encoder: &Encoder,
    request: &EncodeRequest,
    options: &RenderOptions,
) -> Result<RasterImage, BarraError> {
    let modules = encoder.encode(request)?;
    Ok(render_label(&modules, &request.text, options)?)
}

/// Encode and render every request with the default encoder.
pub fn generate_batch(
    requests: &[EncodeRequest],
    options: &RenderOptions,
) -> Vec<Result<RasterImage, BarraError>> {
    BatchGenerator::new(options.clone()).run(requests)
}

/// Cancels a running batch from another thread.
///
/// Items not yet started when the batch is cancelled resolve to
/// [`BarraError::Cancelled`]; items already in progress finish normally.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Reusable batch configuration.
///
/// ## Example
///
/// ```
/// use barra::batch::BatchGenerator;
/// use barra::codec::{ChecksumPolicy, Encoder};
/// use barra::render::RenderOptions;
///
/// let generator = BatchGenerator::new(RenderOptions::compact())
///     .encoder(Encoder::new().checksum_policy(ChecksumPolicy::Verify));
/// let cancel = generator.cancel_handle();
/// // hand `cancel` to another thread, then:
/// let results = generator.run(&[]);
/// assert!(results.is_empty());
/// # cancel.cancel();
/// ```
#[derive(Debug, Clone, Default)]
pub struct BatchGenerator {
    encoder: Encoder,
    options: RenderOptions,
    cancel: CancelHandle,
}

impl BatchGenerator {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn encoder(mut self, encoder: Encoder) -> Self {
        self.encoder = encoder;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Handle that cancels this generator's batches.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Process every request; output index `i` corresponds to `requests[i]`.
    pub fn run(&self, requests: &[EncodeRequest]) -> Vec<Result<RasterImage, BarraError>> {
        debug!(items = requests.len(), "batch started");

        let results: Vec<_> = requests
            .par_iter()
            .map(|request| {
                if self.cancel.is_cancelled() {
                    return Err(BarraError::Cancelled);
                }
                generate_with(&self.encoder, request, &self.options)
            })
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        debug!(items = results.len(), failed, "batch finished");
        results
    }
}
