//! Routes, navigable controls, and the routers that carry out transitions.

use std::fmt;

/// A fixed application destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Basic,
    Ielts,
}

impl Route {
    pub const ALL: [Route; 3] = [Route::Home, Route::Basic, Route::Ielts];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Basic => "/basic",
            Route::Ielts => "/ielts",
        }
    }

    /// Parse a path such as `/basic`, `#/basic` or `/basic/`.
    pub fn from_path(raw: &str) -> Option<Route> {
        let path = raw.strip_prefix('#').unwrap_or(raw);
        let path = match path {
            "" | "/" => "/",
            p => p.strip_suffix('/').unwrap_or(p),
        };
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// An externally owned operation a control can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ShowSettings,
    ShowHistory,
}

/// What activating a control does: move to a route, or call out to the owner.
///
/// Buttons carry one of these so the same widget works for both kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Route(Route),
    Action(Action),
}

impl NavTarget {
    /// Carry out the target: route targets go to `navigate`, action
    /// targets to `invoke`. Exactly one of the two is called, once.
    pub fn dispatch(self, navigate: impl FnOnce(Route), invoke: impl FnOnce(Action)) {
        match self {
            NavTarget::Route(route) => navigate(route),
            NavTarget::Action(action) => invoke(action),
        }
    }
}

/// Something that can perform route transitions.
///
/// Transitions are fire-and-forget: callers never wait on or observe them.
pub trait Navigator {
    fn navigate(&mut self, route: Route);

    fn current(&self) -> Route;
}

/// In-memory router with a history stack.
#[derive(Debug, Clone)]
pub struct MemoryRouter {
    history: Vec<Route>,
}

impl MemoryRouter {
    pub fn new(start: Route) -> Self {
        Self { history: vec![start] }
    }

    /// Every route visited, oldest first, including the start route.
    #[cfg(test)]
    pub fn history(&self) -> &[Route] {
        &self.history
    }
}

impl Navigator for MemoryRouter {
    fn navigate(&mut self, route: Route) {
        log::info!("route {} -> {}", self.current(), route);
        self.history.push(route);
    }

    fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Home)
    }
}

/// Router backed by the URL fragment (`#/basic`), so browser back/forward
/// buttons and bookmarks work.
#[cfg(target_arch = "wasm32")]
pub struct HashRouter;

#[cfg(target_arch = "wasm32")]
impl HashRouter {
    fn location() -> Option<web_sys::Location> {
        web_sys::window().map(|w| w.location())
    }
}

#[cfg(target_arch = "wasm32")]
impl Navigator for HashRouter {
    fn navigate(&mut self, route: Route) {
        log::info!("route {} -> {}", self.current(), route);
        if let Some(location) = Self::location() {
            if location.set_hash(route.path()).is_err() {
                log::warn!("could not update location hash to {}", route);
            }
        }
    }

    fn current(&self) -> Route {
        Self::location()
            .and_then(|l| l.hash().ok())
            .and_then(|h| Route::from_path(&h))
            .unwrap_or(Route::Home)
    }
}
