//! Backend endpoint configuration.
//!
//! The only setting the app has is the backend base URL; every endpoint is derived from it.

/// Base URL used when the build does not provide one.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

/// Where the school API lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Builds a config from a base URL. Trailing slashes are dropped so paths join cleanly.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Uses `value` when it is set and non-blank, `DEFAULT_BACKEND_URL` otherwise.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BACKEND_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `POST` target for new schools.
    pub fn create_url(&self) -> String {
        format!("{}/create", self.base_url)
    }

    /// `GET` target for the school listing.
    pub fn schools_url(&self) -> String {
        format!("{}/schools", self.base_url)
    }

    /// Static URL of an uploaded school image.
    pub fn image_url(&self, image: &str) -> String {
        format!("{}/schoolImages/{}", self.base_url, image)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}
