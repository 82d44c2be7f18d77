//! Path routing for the shell's content column.
//!
//! A static table binds a small set of paths to page collaborators. The root
//! path is not a page: it redirects (replacing the location) to the default
//! route. Paths outside the table resolve to an explicit not-found outcome.

use crate::error::ShellError;

/// Root path, aliased to the default route.
pub const ROOT_PATH: &str = "/";

/// Every addressable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Query,
    Resume,
    Metrics,
    Upload,
}

impl Route {
    /// Registration order, which is also the navigation surface order.
    pub const ALL: [Route; 4] = [Route::Query, Route::Resume, Route::Metrics, Route::Upload];

    pub fn path(self) -> &'static str {
        match self {
            Route::Query => "/query",
            Route::Resume => "/resume",
            Route::Metrics => "/metrics",
            Route::Upload => "/upload",
        }
    }

    /// Navigation surface label.
    pub fn label(self) -> &'static str {
        match self {
            Route::Query => "Query Interface",
            Route::Resume => "Resume Analyzer",
            Route::Metrics => "System Metrics",
            Route::Upload => "Document Upload",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Query => "💬",
            Route::Resume => "📄",
            Route::Metrics => "📊",
            Route::Upload => "⬆",
        }
    }

    /// Looks up the route registered for `path`.
    pub fn from_path(path: &str) -> Result<Route, ShellError> {
        let normalized = normalize_path(path);
        Route::ALL
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| ShellError::UnknownRoute(path.to_string()))
    }
}

/// Trims whitespace and a single trailing slash. Empty input is the root.
pub fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim();
    if trimmed.is_empty() || trimmed == ROOT_PATH {
        return ROOT_PATH;
    }
    trimmed.strip_suffix('/').unwrap_or(trimmed)
}

/// How a single path resolves against the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Render the page bound to this route
    Render(Route),
    /// Replace the location with this route's path
    Redirect(Route),
    /// No route registered; carries the requested path
    NotFound(String),
}

/// What the content column currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Page(Route),
    NotFound(String),
}

/// Current location plus the static route table.
#[derive(Debug, Clone)]
pub struct Router {
    default_route: Route,
    location: String,
    outcome: RouteOutcome,
}

impl Router {
    /// Creates a router positioned at the root, i.e. on `default_route`.
    pub fn new(default_route: Route) -> Self {
        let mut router = Self {
            default_route,
            location: default_route.path().to_string(),
            outcome: RouteOutcome::Page(default_route),
        };
        router.navigate(ROOT_PATH);
        router
    }

    pub fn default_route(&self) -> Route {
        self.default_route
    }

    /// Programmatic lookup that reports unmapped paths as errors.
    pub fn lookup(&self, path: &str) -> Result<Route, ShellError> {
        Route::from_path(path)
    }

    /// Resolves a path without changing the location.
    pub fn resolve(&self, path: &str) -> Resolution {
        let normalized = normalize_path(path);
        if normalized == ROOT_PATH {
            return Resolution::Redirect(self.default_route);
        }
        match Route::from_path(normalized) {
            Ok(route) => Resolution::Render(route),
            Err(_) => Resolution::NotFound(normalized.to_string()),
        }
    }

    /// Navigates to `path`, following a root redirect if needed.
    pub fn navigate(&mut self, path: &str) -> &RouteOutcome {
        match self.resolve(path) {
            Resolution::Render(route) => {
                self.location = route.path().to_string();
                self.outcome = RouteOutcome::Page(route);
            }
            Resolution::Redirect(route) => {
                tracing::debug!(to = route.path(), "redirecting root path");
                self.location = route.path().to_string();
                self.outcome = RouteOutcome::Page(route);
            }
            Resolution::NotFound(missing) => {
                tracing::warn!(path = %missing, "no route registered for path");
                self.location = missing.clone();
                self.outcome = RouteOutcome::NotFound(missing);
            }
        }
        &self.outcome
    }

    /// Path currently shown in the location.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn outcome(&self) -> &RouteOutcome {
        &self.outcome
    }

    /// The active route, or `None` while showing the not-found page.
    pub fn current_route(&self) -> Option<Route> {
        match self.outcome {
            RouteOutcome::Page(route) => Some(route),
            RouteOutcome::NotFound(_) => None,
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new(Route::Query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_default() {
        let router = Router::new(Route::Query);
        assert_eq!(router.resolve("/"), Resolution::Redirect(Route::Query));
        assert_eq!(router.resolve(""), Resolution::Redirect(Route::Query));
        assert_eq!(router.location(), "/query");
        assert_eq!(router.current_route(), Some(Route::Query));
    }

    #[test]
    fn test_root_never_renders_directly() {
        let mut router = Router::new(Route::Metrics);
        router.navigate("/upload");
        router.navigate("/");
        assert_eq!(router.location(), "/metrics");
        assert_eq!(router.outcome(), &RouteOutcome::Page(Route::Metrics));
    }

    #[test]
    fn test_each_registered_path_renders_its_own_route() {
        let mut router = Router::default();
        for route in Route::ALL {
            assert_eq!(router.navigate(route.path()), &RouteOutcome::Page(route));
            assert_eq!(router.location(), route.path());
        }
    }

    #[test]
    fn test_paths_are_normalized() {
        let router = Router::default();
        assert_eq!(router.resolve(" /metrics/ "), Resolution::Render(Route::Metrics));
        assert_eq!(
            router.resolve("/Metrics"),
            Resolution::NotFound("/Metrics".to_string())
        );
    }

    #[test]
    fn test_unknown_path_shows_not_found() {
        let mut router = Router::default();
        let outcome = router.navigate("/settings").clone();
        assert_eq!(outcome, RouteOutcome::NotFound("/settings".to_string()));
        assert_eq!(router.location(), "/settings");
        assert_eq!(router.current_route(), None);
    }

    #[test]
    fn test_lookup_reports_unknown_route() {
        let router = Router::default();
        assert_eq!(router.lookup("/resume").unwrap(), Route::Resume);
        assert!(matches!(router.lookup("/"), Err(ShellError::UnknownRoute(_))));
        assert!(matches!(router.lookup("/nope"), Err(ShellError::UnknownRoute(p)) if p == "/nope"));
    }
}
