//! Read-only store over an exported data file.

use std::path::Path;

use fts_content::{Footer, GalleryImage, Navigation, Page, SiteData, SiteSettings};

use crate::store::{ContentStore, StoreError};

/// Read-only view over a [`SiteData`] export written by the extraction
/// tool.
///
/// The export holds a single site, so the `site_id` argument is matched
/// against the export's own id only when the export carries one.
#[derive(Debug)]
pub struct FileStore {
    data: SiteData,
}

impl FileStore {
    /// Load an exported data file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let raw = std::fs::read_to_string(path)?;
        let data: SiteData = serde_json::from_str(&raw)?;
        Ok(Self { data })
    }

    /// Wrap an in-memory data set.
    #[must_use]
    pub fn from_data(data: SiteData) -> Self {
        Self { data }
    }

    /// All page ids present in the export.
    #[must_use]
    pub fn page_ids(&self) -> Vec<&str> {
        self.data.pages.keys().map(String::as_str).collect()
    }

    fn serves(&self, site_id: &str) -> bool {
        match &self.data.site.id {
            Some(id) => id == site_id,
            None => true,
        }
    }
}

impl ContentStore for FileStore {
    fn site_settings(&self, site_id: &str) -> Result<Option<SiteSettings>, StoreError> {
        if !self.serves(site_id) {
            return Ok(None);
        }
        Ok(Some(self.data.site.clone()))
    }

    fn page(&self, site_id: &str, page_id: &str) -> Result<Option<Page>, StoreError> {
        if !self.serves(site_id) {
            return Ok(None);
        }
        Ok(self.data.pages.get(page_id).cloned())
    }

    fn navigation(&self, site_id: &str) -> Result<Option<Navigation>, StoreError> {
        if !self.serves(site_id) {
            return Ok(None);
        }
        Ok(self.data.navigation.clone())
    }

    fn footer(&self, site_id: &str) -> Result<Option<Footer>, StoreError> {
        if !self.serves(site_id) {
            return Ok(None);
        }
        Ok(self.data.footer.clone())
    }

    fn gallery_images(
        &self,
        _site_id: &str,
        _category: Option<&str>,
    ) -> Result<Vec<GalleryImage>, StoreError> {
        // Exports carry no gallery collection.
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::io::Write as _;

    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_data() -> SiteData {
        let mut pages = BTreeMap::new();
        pages.insert(
            "home".to_owned(),
            Page {
                id: "home".to_owned(),
                title: "Home".to_owned(),
                blocks: Vec::new(),
            },
        );
        SiteData {
            site: SiteSettings {
                id: Some("flip-the-switch".to_owned()),
                ..SiteSettings::fallback()
            },
            pages,
            navigation: Some(Navigation::fallback()),
            footer: Some(Footer::fallback()),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&sample_data()).unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = FileStore::load(file.path()).unwrap();
        let page = store.page("flip-the-switch", "home").unwrap().unwrap();
        assert_eq!(page.title, "Home");
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        assert!(matches!(
            FileStore::load(file.path()),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_missing_page_is_none() {
        let store = FileStore::from_data(sample_data());
        assert!(store.page("flip-the-switch", "missing").unwrap().is_none());
    }

    #[test]
    fn test_other_site_id_not_served() {
        let store = FileStore::from_data(sample_data());

        assert!(store.page("other-site", "home").unwrap().is_none());
        assert!(store.navigation("other-site").unwrap().is_none());
    }

    #[test]
    fn test_export_without_site_id_serves_any() {
        let mut data = sample_data();
        data.site.id = None;
        let store = FileStore::from_data(data);

        assert!(store.page("anything", "home").unwrap().is_some());
    }

    #[test]
    fn test_gallery_is_empty() {
        let store = FileStore::from_data(sample_data());
        assert!(store.gallery_images("flip-the-switch", None).unwrap().is_empty());
    }

    #[test]
    fn test_page_ids() {
        let store = FileStore::from_data(sample_data());
        assert_eq!(store.page_ids(), vec!["home"]);
    }
}
