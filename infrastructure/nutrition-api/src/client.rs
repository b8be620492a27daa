use reqwest::Client;
use url::Url;

use business::domain::scan::value_objects::Barcode;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, thiserror::Error)]
pub enum ClientConfigError {
    #[error("invalid nutrition backend URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("nutrition backend URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),
}

/// Shared HTTP client for the nutrition backend.
///
/// No timeout or retry is configured, the reqwest defaults apply.
pub struct NutritionApiClient {
    pub client: Client,
    pub base_url: Url,
}

impl NutritionApiClient {
    pub fn new(base_url: &str) -> Result<Self, ClientConfigError> {
        let parsed = Url::parse(base_url).map_err(|source| ClientConfigError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientConfigError::UnsupportedScheme(
                parsed.scheme().to_string(),
            ));
        }

        Ok(Self {
            client: Client::new(),
            base_url: parsed,
        })
    }

    /// Returns the scan endpoint URL for a barcode. The barcode is inserted
    /// raw; reqwest percent-encodes whatever it must when the request is built.
    pub fn scan_url(&self, barcode: &Barcode) -> String {
        format!(
            "{}/scan/{}",
            self.base_url.as_str().trim_end_matches('/'),
            barcode
        )
    }
}
