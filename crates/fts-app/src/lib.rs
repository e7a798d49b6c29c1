//! Page orchestrator.
//!
//! [`App`] ties the navigation state machine, a content store and the
//! renderer together. On construction it fetches navigation and footer
//! once (process-lifetime state, substituting the fixed fallbacks when the
//! read fails or comes back empty) and registers one route per known page
//! plus the 404 handler. Each navigation then fetches the page's block
//! sequence fresh and produces a complete [`View`] - a clear-then-rebuild
//! replacement for the display root, never a partial patch.
//!
//! Each `navigate` call runs its fetch-then-render sequence to completion
//! before returning; overlapping navigations are not coalesced or
//! cancelled, so a slow fetch for an abandoned path can still complete
//! and overwrite a newer render when a shell drives fetches concurrently.
//! That matches the legacy control flow and is intentionally left as-is.

use fts_content::{Footer, Navigation, Page};
use fts_render::{render_error, render_not_found, render_page};
use fts_router::{Effects, Router, page_id};
use fts_store::ContentStore;
use tracing::{error, warn};

/// Client routes, one per known page.
pub const ROUTES: [&str; 6] = ["/", "/about", "/programs", "/schedule", "/gallery", "/contact"];

/// Fixed site title, used alone when a page has no title of its own.
const SITE_TITLE: &str = "Flip The Switch Performance";

/// What a resolved route does.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RouteAction {
    /// Fetch and render the page with this id.
    Page(String),
    /// Render the 404 experience.
    NotFound,
}

/// One rendered navigation result: the full document body plus the
/// document title and the side effects the shell must run.
#[derive(Debug)]
pub struct View {
    /// The path now current.
    pub path: String,
    /// Document title.
    pub title: String,
    /// Complete display-root contents.
    pub html: String,
    /// History/scroll effects for the shell.
    pub effects: Effects,
}

/// The page orchestrator.
pub struct App<S: ContentStore> {
    store: S,
    site_id: String,
    router: Router<RouteAction>,
    navigation: Navigation,
    footer: Footer,
}

impl<S: ContentStore> App<S> {
    /// Initialize the orchestrator: fetch navigation and footer once and
    /// register the page routes plus the 404 handler.
    pub fn new(store: S, site_id: impl Into<String>) -> Self {
        let site_id = site_id.into();

        let navigation = match store.navigation(&site_id) {
            Ok(Some(nav)) => nav,
            Ok(None) => Navigation::fallback(),
            Err(e) => {
                warn!(error = %e, "navigation fetch failed, using fallback");
                Navigation::fallback()
            }
        };
        let footer = match store.footer(&site_id) {
            Ok(Some(footer)) => footer,
            Ok(None) => Footer::fallback(),
            Err(e) => {
                warn!(error = %e, "footer fetch failed, using fallback");
                Footer::fallback()
            }
        };

        let mut router = Router::new();
        for path in ROUTES {
            router.register(path, RouteAction::Page(page_id(path)));
        }
        router.register("/404", RouteAction::NotFound);

        Self {
            store,
            site_id,
            router,
            navigation,
            footer,
        }
    }

    /// Initial navigation from the startup location. No history push, so
    /// loading the page does not create a duplicate entry.
    pub fn start(&mut self, path: &str) -> Option<View> {
        self.navigate(path, false)
    }

    /// Run one navigation. Returns `None` when the target equals the
    /// current path (suppressed re-navigation).
    pub fn navigate(&mut self, path: &str, push_history: bool) -> Option<View> {
        let transition = self.router.navigate(path, push_history)?;
        let action = transition
            .handler
            .cloned()
            .unwrap_or(RouteAction::NotFound);
        let effects = transition.effects;
        let resolved_path = transition.path;

        let view = match action {
            RouteAction::Page(id) => self.page_view(&id, resolved_path, effects),
            RouteAction::NotFound => self.not_found_view(resolved_path, effects),
        };
        Some(view)
    }

    /// The navigation record in use (fetched or fallback).
    #[must_use]
    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    /// The footer record in use (fetched or fallback).
    #[must_use]
    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    fn page_view(&self, page_id: &str, path: String, effects: Effects) -> View {
        match self.store.page(&self.site_id, page_id) {
            Ok(Some(page)) => View {
                title: page_title(&page),
                html: render_page(&page, &self.navigation, &self.footer),
                path,
                effects,
            },
            Ok(None) => {
                warn!(page = %page_id, "page record missing");
                self.not_found_view(path, effects)
            }
            Err(e) => {
                error!(page = %page_id, error = %e, "page fetch failed");
                View {
                    title: SITE_TITLE.to_owned(),
                    html: render_error(&e.to_string()),
                    path,
                    effects,
                }
            }
        }
    }

    fn not_found_view(&self, path: String, effects: Effects) -> View {
        View {
            path,
            title: SITE_TITLE.to_owned(),
            html: render_not_found(&self.navigation, &self.footer),
            effects,
        }
    }
}

fn page_title(page: &Page) -> String {
    if page.title.is_empty() {
        SITE_TITLE.to_owned()
    } else {
        format!("{} — {SITE_TITLE}", page.title)
    }
}

#[cfg(test)]
mod tests {
    use fts_content::{Block, Description, Hero};
    use fts_extract::{extract_page, parse_document};
    use fts_store::MockStore;
    use pretty_assertions::assert_eq;

    use super::*;

    const SITE: &str = "flip-the-switch";

    fn page(id: &str, title: &str, blocks: Vec<Block>) -> Page {
        Page {
            id: id.to_owned(),
            title: title.to_owned(),
            blocks,
        }
    }

    fn app_with_home() -> App<MockStore> {
        let store = MockStore::new().with_page(
            SITE,
            page(
                "home",
                "Flip The Switch",
                vec![Block::Hero(Hero {
                    title: "Go".to_owned(),
                    ..Hero::default()
                })],
            ),
        );
        App::new(store, SITE)
    }

    #[test]
    fn test_missing_nav_and_footer_fall_back() {
        let app = App::new(MockStore::new(), SITE);

        assert_eq!(app.navigation(), &Navigation::fallback());
        assert_eq!(app.footer(), &Footer::fallback());
    }

    #[test]
    fn test_failing_store_falls_back_for_chrome() {
        let app = App::new(MockStore::failing(), SITE);
        assert_eq!(app.navigation(), &Navigation::fallback());
    }

    #[test]
    fn test_start_renders_home_without_history_push() {
        let mut app = app_with_home();
        let view = app.start("/").unwrap();

        assert!(!view.effects.push_history);
        assert!(view.effects.scroll_to_top);
        assert!(view.html.contains("hero"));
        assert_eq!(view.title, "Flip The Switch — Flip The Switch Performance");
    }

    #[test]
    fn test_renavigation_suppressed() {
        let mut app = app_with_home();

        assert!(app.navigate("/", false).is_some());
        assert!(app.navigate("/", true).is_none());
    }

    #[test]
    fn test_trailing_slash_resolves_registered_page() {
        let store = MockStore::new().with_page(SITE, page("about", "About", Vec::new()));
        let mut app = App::new(store, SITE);

        let view = app.navigate("/about/", true).unwrap();
        assert_eq!(view.title, "About — Flip The Switch Performance");
        assert!(view.effects.push_history);
    }

    #[test]
    fn test_missing_page_renders_not_found() {
        let mut app = app_with_home();
        let view = app.navigate("/about", true).unwrap();

        assert!(view.html.contains("404"));
        assert_eq!(view.title, SITE_TITLE);
    }

    #[test]
    fn test_unregistered_path_renders_not_found() {
        let mut app = app_with_home();
        let view = app.navigate("/definitely-not-a-route", true).unwrap();

        assert!(view.html.contains("404"));
        assert!(view.html.contains("site-header"));
    }

    #[test]
    fn test_store_error_renders_error_panel() {
        // Chrome fetch fails too, so the app starts on fallbacks; the page
        // fetch error must surface as the error view, not a blank page.
        let mut app = App::new(MockStore::failing(), SITE);
        let view = app.navigate("/about", true).unwrap();

        assert!(view.html.contains("Something went wrong"));
        assert!(view.html.contains("mock store failure"));
        assert!(view.html.contains(r#"href="/""#));
    }

    #[test]
    fn test_untitled_page_uses_site_title() {
        let store = MockStore::new().with_page(SITE, page("about", "", Vec::new()));
        let mut app = App::new(store, SITE);

        let view = app.navigate("/about", true).unwrap();
        assert_eq!(view.title, SITE_TITLE);
    }

    #[test]
    fn test_extracted_page_renders_end_to_end() {
        let html = r#"<html><head><title>Home — Flip The Switch</title></head><body>
            <div class="hero">
                <h1 class="hero-title">Train <span class="highlight">Harder</span></h1>
            </div>
            <div class="content-block">
                <div class="content-block__text">
                    <h2 class="content-block__title">Our Method</h2>
                    <p class="content-block__description">First paragraph.</p>
                    <p class="content-block__description">Second paragraph.</p>
                </div>
            </div>
        </body></html>"#;

        let doc = parse_document(html).unwrap();
        let extracted = extract_page(&doc, "home");

        assert_eq!(extracted.blocks.len(), 2);
        let Block::Hero(hero) = &extracted.blocks[0] else {
            panic!("expected hero first");
        };
        assert_eq!(hero.title, "Train {highlight}Harder{/highlight}");
        let Block::ContentBlock(content) = &extracted.blocks[1] else {
            panic!("expected content block second");
        };
        assert_eq!(
            content.description,
            Description::Many(vec![
                "First paragraph.".to_owned(),
                "Second paragraph.".to_owned()
            ])
        );

        let store = MockStore::new().with_page(SITE, extracted);
        let mut app = App::new(store, SITE);
        let view = app.start("/").unwrap();

        assert!(view.html.contains("site-header"));
        assert_eq!(view.html.matches(r#"<span class="highlight">"#).count(), 1);
        assert_eq!(
            view.html
                .matches(r#"<p class="content-block__description">"#)
                .count(),
            2
        );
        assert_eq!(
            view.html
                .matches("content-block__media--placeholder")
                .count(),
            1
        );
        assert!(view.html.contains("site-footer"));
        assert_eq!(view.title, "Home — Flip The Switch Performance");
    }
}
