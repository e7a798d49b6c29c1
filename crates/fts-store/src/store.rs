//! Store traits, error type and document addressing.

use fts_content::{Footer, GalleryImage, Navigation, Page, SiteSettings};

/// Error from a content-store operation.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request error (status 0 means the request never completed).
    #[error("HTTP error: {status} - {body}")]
    Http { status: u16, body: String },

    /// IO error (credential file, export file).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// Backend unavailable or misconfigured.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Json(e.to_string())
    }
}

impl From<ureq::Error> for StoreError {
    fn from(e: ureq::Error) -> Self {
        StoreError::Http {
            status: 0,
            body: e.to_string(),
        }
    }
}

/// Document path for the site settings record.
#[must_use]
pub fn site_doc(site_id: &str) -> String {
    format!("sites/{site_id}")
}

/// Document path for a page record.
#[must_use]
pub fn page_doc(site_id: &str, page_id: &str) -> String {
    format!("sites/{site_id}/pages/{page_id}")
}

/// Document path for the main navigation record.
#[must_use]
pub fn navigation_doc(site_id: &str) -> String {
    format!("sites/{site_id}/navigation/main")
}

/// Document path for the footer component record.
#[must_use]
pub fn footer_doc(site_id: &str) -> String {
    format!("sites/{site_id}/components/footer")
}

/// Collection path for the gallery image records.
#[must_use]
pub fn gallery_collection(site_id: &str) -> String {
    format!("sites/{site_id}/media/gallery/images")
}

/// Read access to the persisted content model.
///
/// Every navigation event is a fresh read; implementations must not assume
/// a caller-side cache.
pub trait ContentStore {
    /// Site settings record, `None` when absent.
    fn site_settings(&self, site_id: &str) -> Result<Option<SiteSettings>, StoreError>;

    /// Page record by id, `None` when absent.
    fn page(&self, site_id: &str, page_id: &str) -> Result<Option<Page>, StoreError>;

    /// Main navigation record, `None` when absent.
    fn navigation(&self, site_id: &str) -> Result<Option<Navigation>, StoreError>;

    /// Footer component record, `None` when absent.
    fn footer(&self, site_id: &str) -> Result<Option<Footer>, StoreError>;

    /// Gallery images ordered by their explicit `order` field, optionally
    /// filtered by category.
    fn gallery_images(
        &self,
        site_id: &str,
        category: Option<&str>,
    ) -> Result<Vec<GalleryImage>, StoreError>;
}

/// Write access to the persisted content model (used by the extraction
/// tool's upload step).
pub trait ContentSink {
    fn put_site_settings(&self, site_id: &str, settings: &SiteSettings) -> Result<(), StoreError>;

    fn put_page(&self, site_id: &str, page: &Page) -> Result<(), StoreError>;

    fn put_navigation(&self, site_id: &str, navigation: &Navigation) -> Result<(), StoreError>;

    fn put_footer(&self, site_id: &str, footer: &Footer) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_document_paths() {
        assert_eq!(site_doc("flip-the-switch"), "sites/flip-the-switch");
        assert_eq!(
            page_doc("flip-the-switch", "about"),
            "sites/flip-the-switch/pages/about"
        );
        assert_eq!(
            navigation_doc("flip-the-switch"),
            "sites/flip-the-switch/navigation/main"
        );
        assert_eq!(
            footer_doc("flip-the-switch"),
            "sites/flip-the-switch/components/footer"
        );
        assert_eq!(
            gallery_collection("flip-the-switch"),
            "sites/flip-the-switch/media/gallery/images"
        );
    }

    #[test]
    fn test_store_error_display() {
        let err = StoreError::Http {
            status: 503,
            body: "service unavailable".to_owned(),
        };
        assert_eq!(err.to_string(), "HTTP error: 503 - service unavailable");
    }

    #[test]
    fn test_store_error_from_serde() {
        let parse_err = serde_json::from_str::<Page>("not json").unwrap_err();
        let err = StoreError::from(parse_err);
        assert!(matches!(err, StoreError::Json(_)));
    }
}
