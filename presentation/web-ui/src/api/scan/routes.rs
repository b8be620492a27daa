use std::sync::Arc;

use poem_openapi::types::multipart::Upload;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::scan::errors::ScanError;
use business::domain::scan::use_cases::resolve_barcode::{
    BarcodeInput, ResolveBarcodeParams, ResolveBarcodeUseCase,
};
use business::domain::scan::use_cases::scan_product::{ScanProductParams, ScanProductUseCase};
use business::domain::scan::value_objects::{Barcode, CapturedImage, InputMode};

use crate::api::error::ErrorResponse;
use crate::api::scan::dto::{
    BarcodeDetectionResponse, ExtractBarcodeForm, ScanForm, ScanView, detected_message,
};
use crate::api::scan::error_mapper::{IntoScanFailure, no_barcode_message};
use crate::api::tags::ApiTags;

pub struct ScanApi {
    resolve_use_case: Arc<dyn ResolveBarcodeUseCase>,
    scan_use_case: Arc<dyn ScanProductUseCase>,
}

impl ScanApi {
    pub fn new(
        resolve_use_case: Arc<dyn ResolveBarcodeUseCase>,
        scan_use_case: Arc<dyn ScanProductUseCase>,
    ) -> Self {
        Self {
            resolve_use_case,
            scan_use_case,
        }
    }

    /// Runs barcode resolution off the async workers; decoding is CPU-bound.
    async fn resolve(&self, input: BarcodeInput) -> Result<Barcode, ScanError> {
        let use_case = self.resolve_use_case.clone();
        tokio::task::spawn_blocking(move || use_case.execute(ResolveBarcodeParams { input }))
            .await
            .unwrap_or(Err(ScanError::NoBarcodeDetected))
    }
}

/// Reads an uploaded file. Browsers post an empty, nameless part when no
/// file was chosen; that counts as no image.
async fn read_upload(upload: Upload) -> Result<Option<CapturedImage>, std::io::Error> {
    let file_name = upload.file_name().map(str::to_string);
    let bytes = upload.into_vec().await?;
    if bytes.is_empty() {
        return Ok(None);
    }
    Ok(Some(CapturedImage::new(bytes, file_name)))
}

/// Barcode scanning API
///
/// Resolves a barcode from typed text or an image and looks the product up in
/// the nutrition backend.
#[OpenApi]
impl ScanApi {
    /// Detect a barcode in an image
    ///
    /// Decodes the first barcode found in a camera capture or an uploaded
    /// jpg/jpeg/png file, without contacting the nutrition backend.
    #[oai(path = "/barcode/extract", method = "post", tag = "ApiTags::Scan")]
    async fn extract_barcode(&self, form: ExtractBarcodeForm) -> ExtractBarcodeResponse {
        let source = match form.mode.parse::<InputMode>().ok().and_then(|m| m.image_source()) {
            Some(source) => source,
            None => {
                return ExtractBarcodeResponse::InvalidRequest(Json(ErrorResponse::validation(
                    "scan.invalid_image_mode",
                )));
            }
        };

        let image = match read_upload(form.image).await {
            Ok(Some(image)) => image,
            Ok(None) => {
                return ExtractBarcodeResponse::NotDetected(Json(
                    BarcodeDetectionResponse::missing(no_barcode_message(Some(source))),
                ));
            }
            Err(_) => {
                return ExtractBarcodeResponse::InvalidRequest(Json(ErrorResponse::validation(
                    "scan.unreadable_upload",
                )));
            }
        };

        match self.resolve(BarcodeInput::Image { source, image }).await {
            Ok(barcode) => {
                ExtractBarcodeResponse::Ok(Json(BarcodeDetectionResponse::detected(&barcode)))
            }
            Err(err) => {
                let failure = err.into_scan_failure(Some(source));
                let body = Json(BarcodeDetectionResponse::missing(failure.message));
                match failure.status.as_u16() {
                    415 => ExtractBarcodeResponse::UnsupportedMediaType(body),
                    _ => ExtractBarcodeResponse::NotDetected(body),
                }
            }
        }
    }

    /// Scan a product
    ///
    /// Resolves the barcode for the selected input mode, then performs a
    /// single lookup against the nutrition backend and returns the display
    /// view. No request is sent when no barcode could be resolved.
    #[oai(path = "/scan", method = "post", tag = "ApiTags::Scan")]
    async fn scan(&self, form: ScanForm) -> ScanResponse {
        let mode = match form.mode.parse::<InputMode>() {
            Ok(mode) => mode,
            Err(_) => {
                return ScanResponse::InvalidRequest(Json(ErrorResponse::validation(
                    "scan.invalid_mode",
                )));
            }
        };
        let source = mode.image_source();

        let input = match source {
            None => Some(BarcodeInput::Manual(form.barcode.unwrap_or_default())),
            Some(source) => {
                let image = match form.image {
                    Some(upload) => match read_upload(upload).await {
                        Ok(image) => image,
                        Err(_) => {
                            return ScanResponse::InvalidRequest(Json(
                                ErrorResponse::validation("scan.unreadable_upload"),
                            ));
                        }
                    },
                    None => None,
                };
                image.map(|image| BarcodeInput::Image { source, image })
            }
        };

        let mut detection_message = None;
        let barcode = match input {
            Some(input) => match self.resolve(input).await {
                Ok(barcode) => {
                    if source.is_some() {
                        detection_message = Some(detected_message(&barcode));
                    }
                    Some(barcode)
                }
                Err(ScanError::UnsupportedImageType) => {
                    let failure = ScanError::UnsupportedImageType.into_scan_failure(source);
                    return ScanResponse::UnsupportedMediaType(Json(ScanView::failed(
                        failure.view_status,
                        failure.message,
                        None,
                        None,
                    )));
                }
                Err(ScanError::NoBarcodeDetected) => {
                    detection_message = Some(no_barcode_message(source).to_string());
                    None
                }
                Err(_) => None,
            },
            None => None,
        };

        let result = self
            .scan_use_case
            .execute(ScanProductParams {
                barcode: barcode.clone(),
            })
            .await;

        match (result, barcode) {
            (Ok(report), Some(barcode)) => {
                ScanResponse::Ok(Json(ScanView::displayed(&barcode, detection_message, report)))
            }
            (Ok(_), None) => {
                // The use case never reports a product without a barcode.
                let failure = ScanError::MissingBarcodeInput.into_scan_failure(source);
                ScanResponse::MissingBarcode(Json(ScanView::failed(
                    failure.view_status,
                    failure.message,
                    None,
                    detection_message,
                )))
            }
            (Err(err), barcode) => {
                let failure = err.into_scan_failure(source);
                let view = Json(ScanView::failed(
                    failure.view_status,
                    failure.message,
                    barcode.as_ref(),
                    detection_message,
                ));
                match failure.status.as_u16() {
                    404 => ScanResponse::NotFound(view),
                    415 => ScanResponse::UnsupportedMediaType(view),
                    502 => ScanResponse::BadGateway(view),
                    _ => ScanResponse::MissingBarcode(view),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ExtractBarcodeResponse {
    #[oai(status = 200)]
    Ok(Json<BarcodeDetectionResponse>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<BarcodeDetectionResponse>),
    #[oai(status = 422)]
    NotDetected(Json<BarcodeDetectionResponse>),
    #[oai(status = 400)]
    InvalidRequest(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ScanResponse {
    #[oai(status = 200)]
    Ok(Json<ScanView>),
    #[oai(status = 400)]
    InvalidRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ScanView>),
    #[oai(status = 415)]
    UnsupportedMediaType(Json<ScanView>),
    #[oai(status = 422)]
    MissingBarcode(Json<ScanView>),
    #[oai(status = 502)]
    BadGateway(Json<ScanView>),
}
