//! Full-page assembly.

use fts_content::{Footer, Navigation, Page};

use crate::blocks::render_block;
use crate::chrome::{error_view, not_found_main, site_footer, site_header, skip_link};

/// Render a complete page body: skip link, header, `main#main` with the
/// block sequence in order, footer.
///
/// Blocks that render to `None` are skipped; the remaining output order is
/// exactly the block order.
#[must_use]
pub fn render_page(page: &Page, nav: &Navigation, footer: &Footer) -> String {
    let mut out = String::new();
    out.push_str(skip_link());
    out.push_str(&site_header(nav, Some(&page.id)));
    out.push_str(r#"<main id="main">"#);
    for block in &page.blocks {
        if let Some(fragment) = render_block(block) {
            out.push_str(&fragment);
        }
    }
    out.push_str("</main>");
    out.push_str(&site_footer(footer));
    out
}

/// Render the 404 experience with the regular chrome around it.
#[must_use]
pub fn render_not_found(nav: &Navigation, footer: &Footer) -> String {
    let mut out = String::new();
    out.push_str(skip_link());
    out.push_str(&site_header(nav, None));
    out.push_str(&not_found_main());
    out.push_str(&site_footer(footer));
    out
}

/// Render the bare error panel (replaces the whole display root).
#[must_use]
pub fn render_error(message: &str) -> String {
    error_view(message)
}
