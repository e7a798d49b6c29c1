//! Content-store boundary for the FTS site engine.
//!
//! This crate provides the [`ContentStore`] (read) and [`ContentSink`]
//! (write) traits for accessing the persisted content model regardless of
//! backend, plus three implementations:
//!
//! - [`RestStore`]: the hosted document database over HTTP
//! - [`FileStore`]: read-only view over an exported [`fts_content::SiteData`] file
//! - [`MockStore`]: in-memory builder-style store for tests
//!
//! Fallback policy lives with callers: a missing navigation/footer/settings
//! record is `Ok(None)` and the caller substitutes the fixed default; a
//! missing page is `Ok(None)` and the caller routes to the 404 experience.

mod file;
mod mock;
mod rest;
mod store;

pub use file::FileStore;
pub use mock::MockStore;
pub use rest::RestStore;
pub use store::{
    ContentSink, ContentStore, StoreError, footer_doc, gallery_collection, navigation_doc,
    page_doc, site_doc,
};
