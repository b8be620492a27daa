/// Errors surfaced by a scan attempt.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScanError {
    #[error("scan.missing_barcode")]
    MissingBarcodeInput,
    #[error("scan.no_barcode_detected")]
    NoBarcodeDetected,
    #[error("scan.unsupported_image_type")]
    UnsupportedImageType,
    #[error("scan.backend_unreachable")]
    BackendUnreachable,
    #[error("scan.product_not_found")]
    ProductNotFound,
}
