//! Extraction of legacy static pages into the FTS content model.
//!
//! The extractor parses rendered markup into an [`Element`] tree and walks
//! it with a fixed set of region scans, emitting an ordered
//! [`fts_content::Page`] block sequence per page plus separate
//! [`fts_content::Navigation`] and [`fts_content::Footer`] records.
//!
//! Parsing is permissive but not a full HTML5 implementation: named
//! entities are normalized to Unicode up front, void elements close
//! themselves, and raw-text elements (`<script>`, `<style>`) are stripped
//! before the event reader runs. Malformed markup beyond that is not
//! repaired.
//!
//! # Example
//!
//! ```
//! use fts_extract::{extract_page, parse_document};
//!
//! let doc = parse_document("<html><body><div class=\"hero\">\
//!     <h1 class=\"hero-title\">Go</h1></div></body></html>")?;
//! let page = extract_page(&doc, "home");
//! assert_eq!(page.blocks.len(), 1);
//! # Ok::<(), fts_extract::ExtractError>(())
//! ```

mod dom;
mod entities;
mod error;
mod extract;

pub use dom::{Element, parse_document};
pub use error::ExtractError;
pub use extract::{PAGE_FILES, extract_footer, extract_navigation, extract_page};
