//! Client-side navigation state machine.
//!
//! [`Router`] is the pure core: a route table plus the current path.
//! [`Router::navigate`] is a state-transition function that resolves a
//! handler and describes the side effects (history push, scroll reset) for
//! a thin shell to execute; the router itself touches no history, no
//! scroll position and no display. That keeps the transition table fully
//! unit-testable.
//!
//! Resolution order for a requested path: exact match, then the same path
//! with a trailing slash stripped, then the registered `/404` handler,
//! then the home (`/`) handler. Re-navigating to the current path is a
//! suppressed no-op.
//!
//! The initial navigation at startup is an ordinary
//! `navigate(location, false)` — no history push, so loading the page
//! does not create a duplicate entry.

use std::collections::BTreeMap;

/// Side effects the shell must run after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Effects {
    /// Push the new path onto browser history.
    pub push_history: bool,
    /// Reset the scroll position to the top.
    pub scroll_to_top: bool,
}

/// How the handler was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Exact route-table match.
    Exact,
    /// Matched after stripping a trailing slash.
    TrailingSlash,
    /// Fell through to the registered `/404` handler.
    NotFound,
    /// Fell through to the home (`/`) handler.
    Home,
    /// No handler at all (nothing registered for `/404` or `/`).
    Unresolved,
}

/// Result of a navigation: the recorded path, the resolved handler and the
/// side effects to execute.
#[derive(Debug)]
pub struct Transition<'a, H> {
    /// The normalized path now current.
    pub path: String,
    /// How the handler was found.
    pub resolution: Resolution,
    /// The resolved handler, if any route could serve the path.
    pub handler: Option<&'a H>,
    /// Side effects for the shell.
    pub effects: Effects,
}

/// Route table plus current-path state.
#[derive(Debug, Default)]
pub struct Router<H> {
    routes: BTreeMap<String, H>,
    current: Option<String>,
}

impl<H> Router<H> {
    /// Create an empty router.
    #[must_use]
    pub fn new() -> Self {
        Self {
            routes: BTreeMap::new(),
            current: None,
        }
    }

    /// Register a handler for a path. A later registration for the same
    /// path replaces the earlier one.
    pub fn register(&mut self, path: impl Into<String>, handler: H) -> &mut Self {
        self.routes.insert(path.into(), handler);
        self
    }

    /// The path most recently navigated to, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Run one navigation transition.
    ///
    /// The empty path normalizes to `/`. Returns `None` when the target
    /// equals the current path (idempotent re-navigation is suppressed:
    /// no state change, no effects, no handler invocation). Otherwise the
    /// new path is recorded and the resolved handler plus effects are
    /// returned; `push_history` is honored only when the caller requested
    /// it.
    pub fn navigate(&mut self, path: &str, push_history: bool) -> Option<Transition<'_, H>> {
        let path = if path.is_empty() { "/" } else { path };

        if self.current.as_deref() == Some(path) {
            return None;
        }
        self.current = Some(path.to_owned());

        let (resolution, handler) = self.resolve(path);

        Some(Transition {
            path: path.to_owned(),
            resolution,
            handler,
            effects: Effects {
                push_history,
                scroll_to_top: true,
            },
        })
    }

    fn resolve(&self, path: &str) -> (Resolution, Option<&H>) {
        if let Some(handler) = self.routes.get(path) {
            return (Resolution::Exact, Some(handler));
        }
        if path.len() > 1
            && let Some(stripped) = path.strip_suffix('/')
            && let Some(handler) = self.routes.get(stripped)
        {
            return (Resolution::TrailingSlash, Some(handler));
        }
        if let Some(handler) = self.routes.get("/404") {
            return (Resolution::NotFound, Some(handler));
        }
        if let Some(handler) = self.routes.get("/") {
            return (Resolution::Home, Some(handler));
        }
        (Resolution::Unresolved, None)
    }
}

/// Page id for a path: slashes stripped, empty maps to `home`.
#[must_use]
pub fn page_id(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        "home".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Whether a clicked link should be turned into a router navigation
/// instead of a full page load.
///
/// Only path-rooted hrefs qualify; protocol-relative (`//host/...`),
/// absolute, fragment and non-path hrefs pass through untouched.
#[must_use]
pub fn should_intercept(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}
