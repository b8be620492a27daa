use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::{ProductReport, ScanReply};
use crate::domain::scan::services::NutritionBackendService;
use crate::domain::scan::use_cases::scan_product::{ScanProductParams, ScanProductUseCase};

pub struct ScanProductUseCaseImpl {
    pub backend: Arc<dyn NutritionBackendService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScanProductUseCase for ScanProductUseCaseImpl {
    async fn execute(&self, params: ScanProductParams) -> Result<ProductReport, ScanError> {
        let Some(barcode) = params.barcode else {
            self.logger.warn("Scan requested without a barcode");
            return Err(ScanError::MissingBarcodeInput);
        };

        self.logger
            .info(&format!("Scanning product by barcode: {}", barcode));

        let body = self.backend.fetch_scan(&barcode).await.map_err(|err| {
            self.logger
                .error(&format!("Nutrition backend unreachable for {}: {}", barcode, err));
            ScanError::BackendUnreachable
        })?;

        match ScanReply::from_json(&body) {
            Some(ScanReply::Found(report)) => {
                self.logger.info(&format!(
                    "Product scanned: {} (score: {}, warnings: {})",
                    report.product_name,
                    report.health_score_label(),
                    report.warnings.len()
                ));
                Ok(report)
            }
            Some(ScanReply::NotFound) => {
                self.logger
                    .warn(&format!("Product not found for barcode: {}", barcode));
                Err(ScanError::ProductNotFound)
            }
            None => {
                self.logger.error(&format!(
                    "Nutrition backend returned a non-object body for {}",
                    barcode
                ));
                Err(ScanError::BackendUnreachable)
            }
        }
    }
}
