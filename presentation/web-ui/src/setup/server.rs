use poem::{EndpointExt, Route, Server as PoemServer, get, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer, ui};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.scan_api),
            "Nutrition Scanner API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}/api", addr));
        let docs = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .at("/", get(ui::index))
            .nest("/api", api_service)
            .nest("/docs", docs)
            .nest("/openapi.json", spec)
            .with(config.cors)
            .with(Tracing);
        info!("Scanner running at http://{}", addr);
        info!("Nutrition backend at {}", config.backend.base_url);
        info!("Swagger UI at http://{}/docs", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
