//! Build-time Configuration
//!
//! Base URLs come from `FRONTEND_URL` and `BACKEND_URL` at compile time.

use crate::models::Item;

const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_BACKEND_URL: &str = "http://localhost:9000";

/// Asset and API origins
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin serving static assets (placeholder image)
    pub frontend_url: &'static str,
    /// Origin serving the items API and uploaded images
    pub backend_url: &'static str,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::new(
            option_env!("FRONTEND_URL").unwrap_or(DEFAULT_FRONTEND_URL),
            option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL),
        )
    }

    pub fn new(frontend_url: &'static str, backend_url: &'static str) -> Self {
        Self {
            frontend_url: frontend_url.trim_end_matches('/'),
            backend_url: backend_url.trim_end_matches('/'),
        }
    }

    /// Full URL for an API path such as `/items`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }

    pub fn placeholder_image_url(&self) -> String {
        format!("{}/logo192.png", self.frontend_url)
    }

    /// Image to show for an item: the uploaded image, else the placeholder
    pub fn image_url(&self, item: &Item) -> String {
        match item.image_name.as_deref() {
            Some(name) => format!("{}/images/{}", self.backend_url, name),
            None => self.placeholder_image_url(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(image_name: Option<&str>) -> Item {
        Item {
            id: 1,
            name: "A".to_string(),
            category: "X".to_string(),
            image_name: image_name.map(str::to_string),
        }
    }

    #[test]
    fn test_image_url_joins_backend_and_name() {
        let config = AppConfig::new("http://front", "http://back/");
        assert_eq!(config.image_url(&item(Some("abc.jpg"))), "http://back/images/abc.jpg");
    }

    #[test]
    fn test_image_url_falls_back_to_placeholder() {
        let config = AppConfig::new("http://front/", "http://back");
        assert_eq!(config.image_url(&item(None)), "http://front/logo192.png");
    }

    #[test]
    fn test_api_url() {
        let config = AppConfig::new("http://front", "http://back");
        assert_eq!(config.api_url("/items"), "http://back/items");
    }
}
