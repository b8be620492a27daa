use std::sync::Arc;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::services::BarcodeExtractorService;
use crate::domain::scan::use_cases::resolve_barcode::{
    BarcodeInput, ResolveBarcodeParams, ResolveBarcodeUseCase,
};
use crate::domain::scan::value_objects::{Barcode, CapturedImage, ImageSource};

pub struct ResolveBarcodeUseCaseImpl {
    pub extractor: Arc<dyn BarcodeExtractorService>,
    pub logger: Arc<dyn Logger>,
}

impl ResolveBarcodeUseCaseImpl {
    fn resolve_image(
        &self,
        source: ImageSource,
        image: &CapturedImage,
    ) -> Result<Barcode, ScanError> {
        if source == ImageSource::Upload && !image.has_upload_extension() {
            self.logger.warn(&format!(
                "Rejected upload with unsupported file name: {:?}",
                image.file_name
            ));
            return Err(ScanError::UnsupportedImageType);
        }

        self.logger.info(&format!(
            "Extracting barcode from {} image ({} bytes)",
            source,
            image.bytes.len()
        ));

        match self.extractor.extract(image) {
            Ok(barcode) => {
                self.logger
                    .info(&format!("Detected barcode from {} image: {}", source, barcode));
                Ok(barcode)
            }
            Err(failure) => {
                // The cause is only logged, callers always see the same outcome.
                self.logger
                    .debug(&format!("No barcode from {} image: {}", source, failure));
                Err(ScanError::NoBarcodeDetected)
            }
        }
    }
}

impl ResolveBarcodeUseCase for ResolveBarcodeUseCaseImpl {
    fn execute(&self, params: ResolveBarcodeParams) -> Result<Barcode, ScanError> {
        match params.input {
            BarcodeInput::Manual(text) => {
                let barcode = Barcode::new(text)?;
                self.logger
                    .info(&format!("Barcode entered manually: {}", barcode));
                Ok(barcode)
            }
            BarcodeInput::Image { source, image } => self.resolve_image(source, &image),
        }
    }
}
