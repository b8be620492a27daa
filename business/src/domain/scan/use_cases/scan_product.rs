use async_trait::async_trait;

use crate::domain::scan::errors::ScanError;
use crate::domain::scan::model::ProductReport;
use crate::domain::scan::value_objects::Barcode;

pub struct ScanProductParams {
    pub barcode: Option<Barcode>,
}

#[async_trait]
pub trait ScanProductUseCase: Send + Sync {
    async fn execute(&self, params: ScanProductParams) -> Result<ProductReport, ScanError>;
}
