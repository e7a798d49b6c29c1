//! Markup rendering for the FTS content model.
//!
//! [`render_block`] maps each block of the closed union back to an HTML
//! fragment through an exhaustive match; an unrecognized block yields
//! `None` (with a warning) and callers skip it, never inserting an empty
//! placeholder into the output order. [`render_page`] assembles the full
//! document body: skip link, header, main content, footer.
//!
//! Builders are pure: no I/O, no state. All interpolated text and
//! attribute values are HTML-escaped.

mod blocks;
mod chrome;
mod escape;
mod page;

pub use blocks::render_block;
pub use chrome::{error_view, not_found_main, site_footer, site_header, skip_link};
pub use escape::escape_html;
pub use page::{render_error, render_not_found, render_page};
