use async_trait::async_trait;

use super::value_objects::{Barcode, CapturedImage};

/// Why no barcode came out of an image.
///
/// Callers collapse every variant into the same "no barcode detected"
/// outcome; the variants exist for diagnostics only.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractionFailure {
    #[error("no barcode found in image")]
    NotFound,
    #[error("image could not be decoded: {0}")]
    UnreadableImage(String),
    #[error("barcode decoder failed: {0}")]
    DecoderFailed(String),
}

/// Service port for locating and decoding a barcode in an image.
///
/// Decoding is CPU-bound and synchronous; async callers should move it off
/// the runtime threads.
pub trait BarcodeExtractorService: Send + Sync {
    /// Returns the first barcode the decoder reports.
    fn extract(&self, image: &CapturedImage) -> Result<Barcode, ExtractionFailure>;
}

/// Failure talking to the nutrition backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Service port for the remote nutrition backend.
#[async_trait]
pub trait NutritionBackendService: Send + Sync {
    /// Fetches the raw JSON reply for a barcode. The HTTP status is not
    /// interpreted; only transport and body parsing failures are errors.
    async fn fetch_scan(&self, barcode: &Barcode) -> Result<serde_json::Value, BackendError>;
}
