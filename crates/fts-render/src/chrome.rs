//! Page chrome: skip link, header, footer, 404 and error views.

use std::fmt::Write;

use fts_content::{Footer, Navigation};

use crate::escape::escape_html;

/// Skip-to-content affordance placed before the header.
#[must_use]
pub fn skip_link() -> &'static str {
    r##"<a class="skip-link" href="#main">Skip to content</a>"##
}

/// Sticky site header with brand link and primary navigation.
///
/// The item whose id equals `current_page` is marked `aria-current="page"`.
#[must_use]
pub fn site_header(nav: &Navigation, current_page: Option<&str>) -> String {
    let brand_href = if nav.brand.href.is_empty() { "/" } else { &nav.brand.href };

    let mut out = String::from(r#"<header class="site-header"><div class="container header-inner">"#);
    write!(
        out,
        r#"<a class="brand" href="{}">{}</a>"#,
        escape_html(brand_href),
        escape_html(&nav.brand.text)
    )
    .unwrap();
    out.push_str(r#"<nav class="site-nav" aria-label="Primary"><ul>"#);
    for item in &nav.items {
        let current = if current_page == Some(item.id.as_str()) {
            r#" aria-current="page""#
        } else {
            ""
        };
        write!(
            out,
            r#"<li><a href="{}"{current}>{}</a></li>"#,
            escape_html(&item.href),
            escape_html(&item.text)
        )
        .unwrap();
    }
    out.push_str("</ul></nav></div></header>");
    out
}

/// Site footer with brand, contact email, social links and copyright.
#[must_use]
pub fn site_footer(footer: &Footer) -> String {
    let mut out = String::from(r#"<footer class="site-footer"><div class="container">"#);
    write!(out, "<p><strong>{}</strong></p>", escape_html(&footer.brand)).unwrap();
    write!(
        out,
        r#"<p><a href="mailto:{0}">{0}</a></p>"#,
        escape_html(&footer.email)
    )
    .unwrap();
    if !footer.social.is_empty() {
        out.push_str(r#"<div class="social-links">"#);
        for link in &footer.social {
            write!(
                out,
                r#"<a href="{}" aria-label="{}">{}</a>"#,
                escape_html(&link.href),
                escape_html(&link.platform),
                escape_html(&link.label)
            )
            .unwrap();
        }
        out.push_str("</div>");
    }
    write!(out, "<p>{}</p>", escape_html(&footer.copyright)).unwrap();
    out.push_str("</div></footer>");
    out
}

/// Main content of the 404 experience: a hero-styled panel with a way home.
#[must_use]
pub fn not_found_main() -> String {
    let mut out = String::from(
        r#"<main id="main"><section class="hero hero--dark" style="min-height: 80vh;"><div class="hero-inner">"#,
    );
    out.push_str(r#"<h1 class="hero-title">404</h1>"#);
    write!(
        out,
        r#"<p class="hero-subtitle">{}</p>"#,
        escape_html("Page not found. Let's get you back on track.")
    )
    .unwrap();
    out.push_str(
        r#"<div class="hero-ctas"><a class="btn btn--yellow" href="/"><span>Go Home</span></a></div>"#,
    );
    out.push_str("</div></section></main>");
    out
}

/// Error panel shown when a page fetch fails: message plus a home link.
#[must_use]
pub fn error_view(message: &str) -> String {
    let mut out = String::from(r#"<div style="padding: 4rem; text-align: center;">"#);
    out.push_str("<h1>Something went wrong</h1>");
    write!(out, "<p>{}</p>", escape_html(message)).unwrap();
    out.push_str(r#"<a class="btn btn--primary" href="/"><span>Go Home</span></a></div>"#);
    out
}
