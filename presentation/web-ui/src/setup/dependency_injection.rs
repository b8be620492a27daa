use std::sync::Arc;

use barcode::extractor::RxingBarcodeExtractor;
use logger::TracingLogger;
use nutrition_api::client::NutritionApiClient;
use nutrition_api::scan_lookup::ScanLookupHttp;

use business::application::scan::resolve_barcode::ResolveBarcodeUseCaseImpl;
use business::application::scan::scan_product::ScanProductUseCaseImpl;

use crate::config::backend_config::BackendConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub scan_api: crate::api::scan::routes::ScanApi,
}

impl DependencyContainer {
    pub fn new(backend: &BackendConfig) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let extractor = Arc::new(RxingBarcodeExtractor::new());
        let nutrition_client = NutritionApiClient::new(&backend.base_url)?;
        let nutrition_backend = Arc::new(ScanLookupHttp::new(nutrition_client));

        // Scan use cases
        let resolve_use_case = Arc::new(ResolveBarcodeUseCaseImpl {
            extractor,
            logger: logger.clone(),
        });
        let scan_use_case = Arc::new(ScanProductUseCaseImpl {
            backend: nutrition_backend,
            logger,
        });

        let scan_api = crate::api::scan::routes::ScanApi::new(resolve_use_case, scan_use_case);

        Ok(Self {
            health_api,
            scan_api,
        })
    }
}
