//! Flat whole-pattern router.
//!
//! Each route is compiled into one anchored regex over the entire decoded path,
//! and the routes are kept sorted by [`compare_routes`]. Lookup returns the
//! first route whose regex matches. This is the straightforward reference
//! strategy; the segment tree answers the same questions without scanning every
//! route.
//!
//! Precedence differs from the tree in one respect: a wildcard always sorts
//! after literals and named parameters here, whereas the tree tries a wildcard
//! sibling first.

use regex::Regex;
use std::sync::Arc;
use tracing::{debug, trace};

use super::core::Router;
use crate::comparator::compare_routes;
use crate::decode::decode_for_routing;
use crate::error::RouteError;
use crate::route::helper::{
    escape_non_custom_regex, path_elements_keep_trailing, strip_custom_regex,
    DEFAULT_PARAM_REGEX, PATH_ELEMENT_SEPARATOR,
};
use crate::route::{PathElement, Route};

/// A route paired with the regex matching its whole pattern.
#[derive(Debug, Clone)]
pub struct RegexRoute {
    route: Arc<Route>,
    pattern: Regex,
}

impl RegexRoute {
    /// Compile the whole-pattern regex of `route`.
    ///
    /// ```
    /// use segrouter::{RegexRoute, Route};
    ///
    /// let r = RegexRoute::new(Route::new("/say/*/to/:name/:times<[0-9]+>/*")).unwrap();
    /// assert_eq!(r.pattern(), "^/say/([^/]*)/to/([^/]+)/([0-9]+)/(.*)$");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidSegmentPattern`] when a custom sub-pattern
    /// does not compile.
    pub fn new(route: Route) -> Result<Self, RouteError> {
        let source = pattern_source(&route);
        let pattern = Regex::new(&source).map_err(|err| RouteError::InvalidSegmentPattern {
            pattern: route.resource_path().to_string(),
            segment: source.clone(),
            source: err,
        })?;
        Ok(Self {
            route: Arc::new(route),
            pattern,
        })
    }

    #[must_use]
    pub fn route(&self) -> &Arc<Route> {
        &self.route
    }

    /// Source of the compiled whole-pattern regex.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    #[inline]
    fn is_match(&self, decoded_path: &str) -> bool {
        self.pattern.is_match(decoded_path)
    }
}

/// `^/` + one regex fragment per pattern token + `$`.
fn pattern_source(route: &Route) -> String {
    let stripped = strip_custom_regex(route.resource_path());
    let tokens = path_elements_keep_trailing(&stripped);
    let mut by_index: Vec<Option<&PathElement>> = vec![None; tokens.len()];
    for elem in route.path_elements() {
        if let Some(slot) = by_index.get_mut(elem.index()) {
            *slot = Some(elem);
        }
    }

    let last = tokens.len().saturating_sub(1);
    let fragments: Vec<String> = by_index
        .iter()
        .enumerate()
        .map(|(i, elem)| match elem {
            Some(PathElement::Literal { name, .. }) => escape_non_custom_regex(name),
            Some(PathElement::Named { regex, .. }) => {
                format!("({})", regex.as_deref().unwrap_or(DEFAULT_PARAM_REGEX))
            }
            Some(PathElement::Wildcard { .. }) if i == last => "(.*)".to_string(),
            Some(PathElement::Wildcard { .. }) => "([^/]*)".to_string(),
            None => String::new(),
        })
        .collect();

    format!("^/{}$", fragments.join(PATH_ELEMENT_SEPARATOR))
}

/// Router scanning a specificity-sorted list of whole-pattern regexes.
#[derive(Debug, Clone, Default)]
pub struct RegexRouter {
    routes: Vec<RegexRoute>,
}

impl RegexRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered routes, most specific first.
    pub fn routes(&self) -> impl Iterator<Item = &RegexRoute> + '_ {
        self.routes.iter()
    }
}

impl Router for RegexRouter {
    fn add(&mut self, route: Route) -> Result<(), RouteError> {
        let entry = RegexRoute::new(route)?;
        debug!(
            pattern = %entry.route,
            regex = %entry.pattern(),
            "Registered route in regex router"
        );
        match self
            .routes
            .binary_search_by(|existing| compare_routes(&existing.route, &entry.route))
        {
            Ok(pos) => self.routes[pos] = entry,
            Err(pos) => self.routes.insert(pos, entry),
        }
        Ok(())
    }

    fn route(&self, path: &str) -> Option<Arc<Route>> {
        let decoded = decode_for_routing(path);
        trace!(path = %path, candidates = self.routes.len(), "Regex router lookup");
        let found = self
            .routes
            .iter()
            .find(|entry| entry.is_match(&decoded))
            .map(|entry| Arc::clone(&entry.route));
        debug!(
            path = %path,
            pattern = ?found.as_deref().map(Route::resource_path),
            "Regex router lookup finished"
        );
        found
    }
}
