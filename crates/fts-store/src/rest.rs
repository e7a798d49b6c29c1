//! HTTP client for the hosted document database.
//!
//! Documents are plain JSON at the addresses of the persisted content
//! shape (`sites/{siteId}`, `.../pages/{pageId}`, ...). Reads return
//! `Ok(None)` on 404; writes PUT the full document. Authentication is a
//! bearer token read from the configured credential file.

use std::path::Path;
use std::time::Duration;

use fts_content::{Footer, GalleryImage, Navigation, Page, SiteSettings};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::store::{
    ContentSink, ContentStore, StoreError, footer_doc, gallery_collection, navigation_doc,
    page_doc, site_doc,
};

/// Default HTTP timeout in seconds.
const DEFAULT_TIMEOUT: u64 = 30;

/// Document-database REST client.
pub struct RestStore {
    agent: Agent,
    base_url: String,
    token: String,
}

impl RestStore {
    /// Create a client with an explicit bearer token.
    #[must_use]
    pub fn new(base_url: &str, token: impl Into<String>) -> Self {
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(DEFAULT_TIMEOUT)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: token.into(),
        }
    }

    /// Create a client reading the bearer token from a credential file.
    pub fn from_token_file(base_url: &str, token_path: &Path) -> Result<Self, StoreError> {
        let token = std::fs::read_to_string(token_path)?;
        let token = token.trim();
        if token.is_empty() {
            return Err(StoreError::Unavailable(format!(
                "credential file {} is empty",
                token_path.display()
            )));
        }
        Ok(Self::new(base_url, token))
    }

    /// The store base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn doc_url(&self, doc_path: &str) -> String {
        format!("{}/{doc_path}", self.base_url)
    }

    fn get_doc<T: DeserializeOwned>(&self, doc_path: &str) -> Result<Option<T>, StoreError> {
        let url = self.doc_url(doc_path);
        debug!(doc = %doc_path, "Fetching document");

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Accept", "application/json")
            .call()
            .map_err(|e| StoreError::Http {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let mut body = response.into_body();

        if status == 404 {
            return Ok(None);
        }
        if status >= 400 {
            let error_body = body
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(StoreError::Http {
                status,
                body: error_body,
            });
        }

        Ok(Some(body.read_json()?))
    }

    fn put_doc<T: Serialize>(&self, doc_path: &str, value: &T) -> Result<(), StoreError> {
        let url = self.doc_url(doc_path);
        debug!(doc = %doc_path, "Writing document");

        let payload = serde_json::to_vec(value)?;
        let response = self
            .agent
            .put(&url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
            .send(&payload[..])
            .map_err(|e| StoreError::Http {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status().as_u16();
        if status >= 400 {
            let error_body = response
                .into_body()
                .read_to_string()
                .unwrap_or_else(|_| "(unable to read error body)".to_owned());
            return Err(StoreError::Http {
                status,
                body: error_body,
            });
        }
        Ok(())
    }
}

impl ContentStore for RestStore {
    fn site_settings(&self, site_id: &str) -> Result<Option<SiteSettings>, StoreError> {
        self.get_doc(&site_doc(site_id))
    }

    fn page(&self, site_id: &str, page_id: &str) -> Result<Option<Page>, StoreError> {
        self.get_doc(&page_doc(site_id, page_id))
    }

    fn navigation(&self, site_id: &str) -> Result<Option<Navigation>, StoreError> {
        self.get_doc(&navigation_doc(site_id))
    }

    fn footer(&self, site_id: &str) -> Result<Option<Footer>, StoreError> {
        self.get_doc(&footer_doc(site_id))
    }

    fn gallery_images(
        &self,
        site_id: &str,
        category: Option<&str>,
    ) -> Result<Vec<GalleryImage>, StoreError> {
        let mut path = format!("{}?orderBy=order", gallery_collection(site_id));
        if let Some(category) = category {
            path.push_str("&category=");
            path.push_str(category);
        }

        let mut images: Vec<GalleryImage> = self.get_doc(&path)?.unwrap_or_default();
        // Server orders, but a defensive sort keeps the contract local.
        images.sort_by_key(|img| img.order);
        Ok(images)
    }
}

impl ContentSink for RestStore {
    fn put_site_settings(&self, site_id: &str, settings: &SiteSettings) -> Result<(), StoreError> {
        self.put_doc(&site_doc(site_id), settings)
    }

    fn put_page(&self, site_id: &str, page: &Page) -> Result<(), StoreError> {
        self.put_doc(&page_doc(site_id, &page.id), page)
    }

    fn put_navigation(&self, site_id: &str, navigation: &Navigation) -> Result<(), StoreError> {
        self.put_doc(&navigation_doc(site_id), navigation)
    }

    fn put_footer(&self, site_id: &str, footer: &Footer) -> Result<(), StoreError> {
        self.put_doc(&footer_doc(site_id), footer)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let store = RestStore::new("https://content.example.com/v1/", "token");
        assert_eq!(store.base_url(), "https://content.example.com/v1");
        assert_eq!(
            store.doc_url("sites/fts/pages/home"),
            "https://content.example.com/v1/sites/fts/pages/home"
        );
    }

    #[test]
    fn test_from_token_file_reads_and_trims() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  secret-token  ").unwrap();

        let store = RestStore::from_token_file("https://content.example.com", file.path()).unwrap();
        assert_eq!(store.token, "secret-token");
    }

    #[test]
    fn test_from_token_file_rejects_empty() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let result = RestStore::from_token_file("https://content.example.com", file.path());
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[test]
    fn test_from_token_file_missing_is_io_error() {
        let result = RestStore::from_token_file(
            "https://content.example.com",
            Path::new("/nonexistent/token"),
        );
        assert!(matches!(result, Err(StoreError::Io(_))));
    }
}
