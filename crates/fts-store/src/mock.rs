//! Mock store for testing.

use std::collections::HashMap;
use std::sync::RwLock;

use fts_content::{Footer, GalleryImage, Navigation, Page, SiteSettings};

use crate::store::{ContentSink, ContentStore, StoreError};

/// In-memory store for unit tests.
///
/// Configure with the builder methods; reads come from the configured
/// data, writes are recorded and visible to subsequent reads. `failing()`
/// makes every operation return an error, for exercising fallback paths.
///
/// # Example
///
/// ```
/// use fts_content::Page;
/// use fts_store::{ContentStore, MockStore};
///
/// let store = MockStore::new().with_page("site", Page {
///     id: "home".to_owned(),
///     title: "Home".to_owned(),
///     blocks: Vec::new(),
/// });
/// assert!(store.page("site", "home").unwrap().is_some());
/// ```
#[derive(Debug, Default)]
pub struct MockStore {
    settings: RwLock<HashMap<String, SiteSettings>>,
    pages: RwLock<HashMap<(String, String), Page>>,
    navigations: RwLock<HashMap<String, Navigation>>,
    footers: RwLock<HashMap<String, Footer>>,
    gallery: RwLock<HashMap<String, Vec<GalleryImage>>>,
    failing: bool,
}

impl MockStore {
    /// Create a new empty mock store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every operation fail with [`StoreError::Unavailable`].
    #[must_use]
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Add a page record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, site_id: impl Into<String>, page: Page) -> Self {
        self.pages
            .write()
            .unwrap()
            .insert((site_id.into(), page.id.clone()), page);
        self
    }

    /// Set the navigation record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_navigation(self, site_id: impl Into<String>, navigation: Navigation) -> Self {
        self.navigations
            .write()
            .unwrap()
            .insert(site_id.into(), navigation);
        self
    }

    /// Set the footer record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_footer(self, site_id: impl Into<String>, footer: Footer) -> Self {
        self.footers.write().unwrap().insert(site_id.into(), footer);
        self
    }

    /// Set the site settings record.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_settings(self, site_id: impl Into<String>, settings: SiteSettings) -> Self {
        self.settings
            .write()
            .unwrap()
            .insert(site_id.into(), settings);
        self
    }

    /// Add a gallery image.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_gallery_image(self, site_id: impl Into<String>, image: GalleryImage) -> Self {
        self.gallery
            .write()
            .unwrap()
            .entry(site_id.into())
            .or_default()
            .push(image);
        self
    }

    /// Number of stored pages (written + configured), for upload tests.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn page_count(&self) -> usize {
        self.pages.read().unwrap().len()
    }

    fn check(&self) -> Result<(), StoreError> {
        if self.failing {
            return Err(StoreError::Unavailable("mock store failure".to_owned()));
        }
        Ok(())
    }
}

impl ContentStore for MockStore {
    fn site_settings(&self, site_id: &str) -> Result<Option<SiteSettings>, StoreError> {
        self.check()?;
        Ok(self.settings.read().unwrap().get(site_id).cloned())
    }

    fn page(&self, site_id: &str, page_id: &str) -> Result<Option<Page>, StoreError> {
        self.check()?;
        Ok(self
            .pages
            .read()
            .unwrap()
            .get(&(site_id.to_owned(), page_id.to_owned()))
            .cloned())
    }

    fn navigation(&self, site_id: &str) -> Result<Option<Navigation>, StoreError> {
        self.check()?;
        Ok(self.navigations.read().unwrap().get(site_id).cloned())
    }

    fn footer(&self, site_id: &str) -> Result<Option<Footer>, StoreError> {
        self.check()?;
        Ok(self.footers.read().unwrap().get(site_id).cloned())
    }

    fn gallery_images(
        &self,
        site_id: &str,
        category: Option<&str>,
    ) -> Result<Vec<GalleryImage>, StoreError> {
        self.check()?;
        let mut images: Vec<GalleryImage> = self
            .gallery
            .read()
            .unwrap()
            .get(site_id)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|img| category.is_none() || img.category.as_deref() == category)
            .collect();
        images.sort_by_key(|img| img.order);
        Ok(images)
    }
}

impl ContentSink for MockStore {
    fn put_site_settings(&self, site_id: &str, settings: &SiteSettings) -> Result<(), StoreError> {
        self.check()?;
        self.settings
            .write()
            .unwrap()
            .insert(site_id.to_owned(), settings.clone());
        Ok(())
    }

    fn put_page(&self, site_id: &str, page: &Page) -> Result<(), StoreError> {
        self.check()?;
        self.pages
            .write()
            .unwrap()
            .insert((site_id.to_owned(), page.id.clone()), page.clone());
        Ok(())
    }

    fn put_navigation(&self, site_id: &str, navigation: &Navigation) -> Result<(), StoreError> {
        self.check()?;
        self.navigations
            .write()
            .unwrap()
            .insert(site_id.to_owned(), navigation.clone());
        Ok(())
    }

    fn put_footer(&self, site_id: &str, footer: &Footer) -> Result<(), StoreError> {
        self.check()?;
        self.footers
            .write()
            .unwrap()
            .insert(site_id.to_owned(), footer.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn image(order: i64, category: Option<&str>) -> GalleryImage {
        GalleryImage {
            id: None,
            src: Some(format!("img-{order}.jpg")),
            alt: format!("Image {order}"),
            caption: None,
            category: category.map(str::to_owned),
            order,
        }
    }

    #[test]
    fn test_missing_records_are_none() {
        let store = MockStore::new();

        assert!(store.page("site", "home").unwrap().is_none());
        assert!(store.navigation("site").unwrap().is_none());
        assert!(store.footer("site").unwrap().is_none());
        assert!(store.site_settings("site").unwrap().is_none());
    }

    #[test]
    fn test_failing_store_errors_everywhere() {
        let store = MockStore::failing();

        assert!(store.page("site", "home").is_err());
        assert!(store.navigation("site").is_err());
        assert!(store.put_footer("site", &Footer::fallback()).is_err());
    }

    #[test]
    fn test_writes_visible_to_reads() {
        let store = MockStore::new();
        store
            .put_navigation("site", &Navigation::fallback())
            .unwrap();

        let nav = store.navigation("site").unwrap().unwrap();
        assert_eq!(nav.items.len(), 6);
    }

    #[test]
    fn test_gallery_ordering() {
        let store = MockStore::new()
            .with_gallery_image("site", image(2, None))
            .with_gallery_image("site", image(0, None))
            .with_gallery_image("site", image(1, None));

        let images = store.gallery_images("site", None).unwrap();
        let orders: Vec<i64> = images.iter().map(|i| i.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_gallery_category_filter() {
        let store = MockStore::new()
            .with_gallery_image("site", image(0, Some("gym")))
            .with_gallery_image("site", image(1, Some("events")))
            .with_gallery_image("site", image(2, Some("gym")));

        let gym = store.gallery_images("site", Some("gym")).unwrap();
        assert_eq!(gym.len(), 2);
        assert!(gym.iter().all(|i| i.category.as_deref() == Some("gym")));

        let all = store.gallery_images("site", None).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn test_pages_scoped_by_site() {
        let store = MockStore::new().with_page(
            "site-a",
            Page {
                id: "home".to_owned(),
                title: "A".to_owned(),
                blocks: Vec::new(),
            },
        );

        assert!(store.page("site-a", "home").unwrap().is_some());
        assert!(store.page("site-b", "home").unwrap().is_none());
    }
}
