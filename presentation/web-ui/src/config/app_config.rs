use super::{backend_config::BackendConfig, cors_config, server_config::ServerConfig};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    pub cors: Cors,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            backend: BackendConfig::from_env(),
            cors: cors_config::init_cors(),
        }
    }
}
