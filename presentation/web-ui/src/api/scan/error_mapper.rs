use poem::http::StatusCode;

use business::domain::scan::errors::ScanError;
use business::domain::scan::value_objects::ImageSource;

use crate::api::scan::dto::ScanStatusDto;

pub const MISSING_BARCODE_MESSAGE: &str = "Please enter or scan a valid barcode.";
pub const CAMERA_NO_BARCODE_MESSAGE: &str = "No barcode detected. Try again.";
pub const UPLOAD_NO_BARCODE_MESSAGE: &str = "No barcode detected in the uploaded image.";
pub const UNSUPPORTED_IMAGE_MESSAGE: &str = "Only jpg, jpeg and png images are supported.";
pub const BACKEND_UNREACHABLE_MESSAGE: &str = "Backend not running. Start the nutrition API first.";
pub const PRODUCT_NOT_FOUND_MESSAGE: &str = "Product not found in OpenFoodFacts or API.";

/// How a failed scan is presented: HTTP status, view status and message.
pub struct ScanFailure {
    pub status: StatusCode,
    pub view_status: ScanStatusDto,
    pub message: &'static str,
}

pub trait IntoScanFailure {
    fn into_scan_failure(self, source: Option<ImageSource>) -> ScanFailure;
}

impl IntoScanFailure for ScanError {
    fn into_scan_failure(self, source: Option<ImageSource>) -> ScanFailure {
        let (status, view_status, message) = match self {
            ScanError::MissingBarcodeInput => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ScanStatusDto::Warning,
                MISSING_BARCODE_MESSAGE,
            ),
            ScanError::NoBarcodeDetected => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ScanStatusDto::Warning,
                no_barcode_message(source),
            ),
            ScanError::UnsupportedImageType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                ScanStatusDto::UnsupportedImage,
                UNSUPPORTED_IMAGE_MESSAGE,
            ),
            ScanError::BackendUnreachable => (
                StatusCode::BAD_GATEWAY,
                ScanStatusDto::BackendUnreachable,
                BACKEND_UNREACHABLE_MESSAGE,
            ),
            ScanError::ProductNotFound => (
                StatusCode::NOT_FOUND,
                ScanStatusDto::NotFound,
                PRODUCT_NOT_FOUND_MESSAGE,
            ),
        };

        ScanFailure {
            status,
            view_status,
            message,
        }
    }
}

/// "No barcode detected" wording differs between camera and upload.
pub fn no_barcode_message(source: Option<ImageSource>) -> &'static str {
    match source {
        Some(ImageSource::Upload) => UPLOAD_NO_BARCODE_MESSAGE,
        _ => CAMERA_NO_BARCODE_MESSAGE,
    }
}
