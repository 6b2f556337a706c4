//! Endpoint URLs.

use urlencoding::encode;
use web_time::{SystemTime, UNIX_EPOCH};

/// Builds endpoint URLs relative to a base.
///
/// An empty base yields root-relative paths, i.e. the page's own origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiRoutes {
    base: String,
}

impl ApiRoutes {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `POST /upload`
    pub fn upload(&self) -> String {
        format!("{}/upload", self.base)
    }

    /// `POST /filter/update?fileName=…`
    pub fn filter_update(&self, file_name: &str) -> String {
        format!("{}/filter/update?fileName={}", self.base, encode(file_name))
    }

    /// `POST /filter/order?fileName=…`
    pub fn filter_order(&self, file_name: &str) -> String {
        format!("{}/filter/order?fileName={}", self.base, encode(file_name))
    }

    /// `POST /filter/reset` (file name goes in the form body)
    pub fn filter_reset(&self) -> String {
        format!("{}/filter/reset", self.base)
    }

    /// `GET /image/{name}?t={timestamp}`: processed image, cache-busted
    pub fn result_image(&self, file_name: &str, timestamp: u64) -> String {
        format!("{}/image/{}?t={}", self.base, encode(file_name), timestamp)
    }

    /// `GET /uploads/{name}`: original image
    pub fn original_image(&self, file_name: &str) -> String {
        format!("{}/uploads/{}", self.base, encode(file_name))
    }

    /// `GET /download/{name}`: attachment download
    pub fn download(&self, file_name: &str) -> String {
        format!("{}/download/{}", self.base, encode(file_name))
    }

    /// `DELETE /image/{name}`
    pub fn discard(&self, file_name: &str) -> String {
        format!("{}/image/{}", self.base, encode(file_name))
    }
}

/// Milliseconds since the Unix epoch, used to defeat image caching.
pub fn cache_buster() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
