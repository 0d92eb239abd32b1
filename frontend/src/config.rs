use common::config::ApiConfig;

/// Backend settings baked in at build time from `BACKEND_URL`.
pub fn api_config() -> ApiConfig {
    ApiConfig::from_env_value(option_env!("BACKEND_URL"))
}
