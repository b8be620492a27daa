use async_trait::async_trait;

use business::domain::scan::services::{BackendError, NutritionBackendService};
use business::domain::scan::value_objects::Barcode;

use crate::client::NutritionApiClient;

/// Looks products up through the backend's `GET /scan/{barcode}` endpoint.
pub struct ScanLookupHttp {
    client: NutritionApiClient,
}

impl ScanLookupHttp {
    pub fn new(client: NutritionApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NutritionBackendService for ScanLookupHttp {
    async fn fetch_scan(&self, barcode: &Barcode) -> Result<serde_json::Value, BackendError> {
        let response = self
            .client
            .client
            .get(self.client.scan_url(barcode))
            .send()
            .await
            .map_err(|err| BackendError::Request(err.to_string()))?;

        // Not-found replies may come with any status; the body decides.
        response
            .json::<serde_json::Value>()
            .await
            .map_err(|err| BackendError::MalformedResponse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serves one canned HTTP response and hands back the raw request.
    async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();

            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });

        (format!("http://{addr}"), handle)
    }

    fn lookup(base_url: &str) -> ScanLookupHttp {
        ScanLookupHttp::new(NutritionApiClient::new(base_url).unwrap())
    }

    fn barcode(raw: &str) -> Barcode {
        Barcode::new(raw).unwrap()
    }

    #[tokio::test]
    async fn should_get_scan_endpoint_and_return_json_body() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"product_name":"Test Bar","health_score":72,"warnings":["High sugar"]}"#,
        )
        .await;

        let body = lookup(&base_url)
            .fetch_scan(&barcode("1234567890123"))
            .await
            .unwrap();

        assert_eq!(body["product_name"], json!("Test Bar"));
        assert_eq!(body["health_score"], json!(72));
        let request = server.await.unwrap();
        assert!(request.starts_with("GET /scan/1234567890123 HTTP/1.1"));
    }

    #[tokio::test]
    async fn should_return_error_body_regardless_of_status() {
        let (base_url, _server) = serve_once("404 Not Found", r#"{"error":"not found"}"#).await;

        let body = lookup(&base_url)
            .fetch_scan(&barcode("0000000000000"))
            .await
            .unwrap();

        assert_eq!(body, json!({"error": "not found"}));
    }

    #[tokio::test]
    async fn should_fail_with_malformed_response_on_non_json_body() {
        let (base_url, _server) = serve_once("500 Internal Server Error", "Internal Server Error").await;

        let result = lookup(&base_url).fetch_scan(&barcode("42")).await;

        assert!(matches!(result, Err(BackendError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn should_fail_with_request_error_when_backend_is_down() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let result = lookup(&format!("http://{addr}"))
            .fetch_scan(&barcode("42"))
            .await;

        assert!(matches!(result, Err(BackendError::Request(_))));
    }
}
