use nutrition_api::client::DEFAULT_BASE_URL;

/// Location of the nutrition backend that answers `GET /scan/{barcode}`.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
}

impl BackendConfig {
    /// Environment variables:
    /// - NUTRITION_API_URL: backend base URL (default: "http://127.0.0.1:8000")
    ///
    /// The URL is validated when the client is built.
    pub fn from_env() -> Self {
        Self::from_value(std::env::var("NUTRITION_API_URL").ok())
    }

    fn from_value(value: Option<String>) -> Self {
        let base_url = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}
