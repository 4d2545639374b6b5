//! Hash-location router.
//!
//! Patterns are `/`-separated segments where `:name` captures one segment,
//! e.g. `/:filter`. The router remembers the current location and only calls
//! back when it changes. Callbacks return an action for the caller to send;
//! the router never touches state itself.

use std::collections::HashMap;

/// Segments captured by a matched pattern
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// The segment captured as `:name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

struct Route<A> {
    pattern: String,
    segments: Vec<Segment>,
    callback: Box<dyn Fn(&RouteParams) -> A + Send + Sync>,
}

impl<A> Route<A> {
    fn matches(&self, path: &[&str]) -> Option<RouteParams> {
        if path.len() != self.segments.len() {
            return None;
        }
        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal == part => {},
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.params.insert(name.clone(), (*part).to_string());
                },
            }
        }
        Some(params)
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|part| !part.is_empty()).collect()
}

/// Pattern router over `#/...` locations
///
/// # Example
///
/// ```ignore
/// let mut router = Router::new("/all").route("/:filter", |params| {
///     TodoAction::SetFilter {
///         filter: Filter::from_segment(params.get("filter").unwrap_or_default()),
///     }
/// });
///
/// let first = router.init(None);            // fires for "/all"
/// let next = router.navigate("#/active");   // fires
/// let same = router.navigate("#/active");   // None, location unchanged
/// ```
pub struct Router<A> {
    routes: Vec<Route<A>>,
    default_location: String,
    current: Option<String>,
}

impl<A> Router<A> {
    /// Creates a router that starts at `default_location` when none is given
    #[must_use]
    pub fn new(default_location: &str) -> Self {
        Self {
            routes: Vec::new(),
            default_location: Self::normalize(default_location),
            current: None,
        }
    }

    /// Adds a pattern; earlier patterns win
    #[must_use]
    pub fn route<F>(mut self, pattern: &str, callback: F) -> Self
    where
        F: Fn(&RouteParams) -> A + Send + Sync + 'static,
    {
        let segments = split(pattern)
            .into_iter()
            .map(|part| match part.strip_prefix(':') {
                Some(name) => Segment::Param(name.to_string()),
                None => Segment::Literal(part.to_string()),
            })
            .collect();
        self.routes.push(Route {
            pattern: pattern.to_string(),
            segments,
            callback: Box::new(callback),
        });
        self
    }

    /// Strips a leading `#` and guarantees a leading `/`
    #[must_use]
    pub fn normalize(location: &str) -> String {
        let path = location.trim().trim_start_matches('#');
        if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        }
    }

    /// The current location, once initialised
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Fires for the initial location, or the default when there is none
    pub fn init(&mut self, location: Option<&str>) -> Option<A> {
        let location = location
            .map(Self::normalize)
            .filter(|path| path != "/")
            .unwrap_or_else(|| self.default_location.clone());
        self.current = None;
        self.navigate(&location)
    }

    /// Fires when `location` differs from the current one and matches a pattern
    pub fn navigate(&mut self, location: &str) -> Option<A> {
        let location = Self::normalize(location);
        if self.current.as_deref() == Some(location.as_str()) {
            tracing::trace!(%location, "Location unchanged");
            return None;
        }

        let path = split(&location);
        self.current = Some(location.clone());

        for route in &self.routes {
            if let Some(params) = route.matches(&path) {
                tracing::debug!(%location, pattern = %route.pattern, "Route matched");
                return Some((route.callback)(&params));
            }
        }
        tracing::debug!(%location, "No route matches location");
        None
    }
}

impl<A> std::fmt::Debug for Router<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let patterns: Vec<&str> = self.routes.iter().map(|r| r.pattern.as_str()).collect();
        f.debug_struct("Router")
            .field("patterns", &patterns)
            .field("default_location", &self.default_location)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter_router() -> Router<String> {
        Router::new("/all").route("/:filter", |params| {
            params.get("filter").unwrap_or_default().to_string()
        })
    }

    #[test]
    fn init_defaults_to_all() {
        let mut router = filter_router();
        assert_eq!(router.init(None), Some("all".to_string()));
        assert_eq!(router.current(), Some("/all"));
    }

    #[test]
    fn init_uses_given_location() {
        let mut router = filter_router();
        assert_eq!(router.init(Some("#/completed")), Some("completed".to_string()));

        let mut empty = filter_router();
        assert_eq!(empty.init(Some("#/")), Some("all".to_string()));
    }

    #[test]
    fn navigate_fires_only_on_change() {
        let mut router = filter_router();
        router.init(None);
        assert_eq!(router.navigate("#/active"), Some("active".to_string()));
        assert_eq!(router.navigate("/active"), None);
        assert_eq!(router.navigate("active"), None);
        assert_eq!(router.navigate("#/all"), Some("all".to_string()));
    }

    #[test]
    fn unmatched_locations_are_ignored() {
        let mut router = filter_router();
        router.init(None);
        assert_eq!(router.navigate("#/active/extra"), None);
        assert_eq!(router.current(), Some("/active/extra"));
        assert_eq!(router.navigate("#/active"), Some("active".to_string()));
    }

    #[test]
    fn literal_segments_must_match() {
        let mut router: Router<&str> = Router::new("/")
            .route("/items/:id", |_| "item")
            .route("/:filter", |_| "filter");
        assert_eq!(router.navigate("#/items/42"), Some("item"));
        assert_eq!(router.navigate("#/other/42"), None);
        assert_eq!(router.navigate("#/other"), Some("filter"));
    }

    #[test]
    fn normalize_handles_hash_and_slash() {
        assert_eq!(Router::<()>::normalize("#/active"), "/active");
        assert_eq!(Router::<()>::normalize("/active"), "/active");
        assert_eq!(Router::<()>::normalize("active"), "/active");
        assert_eq!(Router::<()>::normalize(""), "/");
    }
}
