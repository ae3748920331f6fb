use super::{
    camera_config::CameraConfig, cors_config, gemini_config::GeminiConfig,
    server_config::ServerConfig,
};
use poem::middleware::Cors;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub gemini: GeminiConfig,
    pub camera: CameraConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            gemini: GeminiConfig::from_env(),
            camera: CameraConfig::from_env(),
        }
    }
}
