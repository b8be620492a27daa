use poem_openapi::types::multipart::Upload;
use poem_openapi::{Enum, Multipart, Object};

use business::domain::scan::model::ProductReport;
use business::domain::scan::value_objects::Barcode;

pub const RETRIEVED_MESSAGE: &str = "Product data retrieved successfully!";
pub const SCORE_LABEL: &str = "Score (0–100)";
pub const NO_ISSUES_MESSAGE: &str = "No major issues detected.";

/// Form posted by the scan page. `mode` is `manual`, `camera` or `upload`;
/// `barcode` is read in manual mode, `image` in the other two.
#[derive(Multipart)]
pub struct ScanForm {
    pub mode: String,
    pub barcode: Option<String>,
    pub image: Option<Upload>,
}

/// Form for decoding a barcode from an image without scanning it.
#[derive(Multipart)]
pub struct ExtractBarcodeForm {
    /// `camera` or `upload`
    pub mode: String,
    pub image: Upload,
}

/// Result of decoding a barcode from an image.
#[derive(Debug, Clone, Object)]
pub struct BarcodeDetectionResponse {
    /// Decoded barcode, absent when none was detected
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    /// Message to show next to the image
    pub message: String,
}

impl BarcodeDetectionResponse {
    pub fn detected(barcode: &Barcode) -> Self {
        Self {
            barcode: Some(barcode.to_string()),
            message: detected_message(barcode),
        }
    }

    pub fn missing(message: &str) -> Self {
        Self {
            barcode: None,
            message: message.to_string(),
        }
    }
}

pub fn detected_message(barcode: &Barcode) -> String {
    format!("Detected Barcode: {}", barcode)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
#[oai(rename_all = "snake_case")]
pub enum ScanStatusDto {
    Displayed,
    Warning,
    NotFound,
    UnsupportedImage,
    BackendUnreachable,
}

/// Product details, field by field, ready to display.
#[derive(Debug, Clone, Object)]
pub struct ProductReportView {
    /// Product name, "Unknown Product" when missing
    pub title: String,
    pub ingredients: String,
    pub model_prediction: String,
    pub result: String,
    pub score_label: String,
    /// Health score, "N/A" when missing
    pub health_score: String,
    /// One entry per warning line
    pub warnings: Vec<String>,
    /// Shown instead of warnings when there are none
    #[oai(skip_serializing_if_is_none)]
    pub no_issues_message: Option<String>,
}

impl From<ProductReport> for ProductReportView {
    fn from(report: ProductReport) -> Self {
        let health_score = report.health_score_label();
        let no_issues_message = if report.has_warnings() {
            None
        } else {
            Some(NO_ISSUES_MESSAGE.to_string())
        };

        Self {
            title: report.product_name,
            ingredients: report.ingredients,
            model_prediction: report.model_prediction,
            result: report.result,
            score_label: SCORE_LABEL.to_string(),
            health_score,
            warnings: report.warnings,
            no_issues_message,
        }
    }
}

/// Everything the page renders after one scan click.
#[derive(Debug, Clone, Object)]
pub struct ScanView {
    pub status: ScanStatusDto,
    /// Headline message for this attempt
    pub message: String,
    /// Barcode that was sent to the backend
    #[oai(skip_serializing_if_is_none)]
    pub barcode: Option<String>,
    /// Outcome of decoding the image, for camera and upload modes
    #[oai(skip_serializing_if_is_none)]
    pub detection_message: Option<String>,
    /// Present only when the product was displayed
    #[oai(skip_serializing_if_is_none)]
    pub report: Option<ProductReportView>,
}

impl ScanView {
    pub fn displayed(
        barcode: &Barcode,
        detection_message: Option<String>,
        report: ProductReport,
    ) -> Self {
        Self {
            status: ScanStatusDto::Displayed,
            message: RETRIEVED_MESSAGE.to_string(),
            barcode: Some(barcode.to_string()),
            detection_message,
            report: Some(report.into()),
        }
    }

    pub fn failed(
        status: ScanStatusDto,
        message: &str,
        barcode: Option<&Barcode>,
        detection_message: Option<String>,
    ) -> Self {
        Self {
            status,
            message: message.to_string(),
            barcode: barcode.map(|b| b.to_string()),
            detection_message,
            report: None,
        }
    }
}
