//! Router capability shared by every matching strategy, plus the match result
//! handed back to callers.

use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::Arc;

use crate::decode::decode_for_path_params;
use crate::error::RouteError;
use crate::route::helper::path_elements;
use crate::route::Route;

/// Maximum number of named parameters before heap allocation.
/// Most patterns have ≤4 named segments (e.g. `/users/:id/posts/:post_id`).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the lookup path.
///
/// Names are `Arc<str>` since they come from registered patterns; values are
/// per-request data taken from the path.
pub type ParamVec = SmallVec<[(Arc<str>, String); MAX_INLINE_PARAMS]>;

/// The capability every matching strategy provides.
///
/// `add` registers a pattern; `route` is a pure lookup returning the single best
/// matching route, or `None`. Implementations must give identical answers for the
/// same path as long as the route set is unchanged.
pub trait Router: Send + Sync {
    /// Register a route.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidSegmentPattern`] when a segment matcher fails
    /// to compile. The router is left unchanged in that case.
    fn add(&mut self, route: Route) -> Result<(), RouteError>;

    /// Best matching route for an undecoded request path.
    fn route(&self, path: &str) -> Option<Arc<Route>>;

    /// Best matching route together with its extracted parameter values.
    fn find(&self, path: &str) -> Option<RouteMatch> {
        self.route(path).map(|route| RouteMatch::new(route, path))
    }
}

/// Result of successfully matching a request path to a route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route
    pub route: Arc<Route>,
    /// Named parameter values, decoded, in pattern order
    pub path_params: ParamVec,
    /// Splat values, decoded, in pattern order
    pub splat: Vec<String>,
}

impl RouteMatch {
    /// Extract every parameter of `route` from a path it matched.
    #[must_use]
    pub fn new(route: Arc<Route>, path: &str) -> Self {
        let tokens = path_elements(path);
        let path_params = route
            .named_parameter_elements()
            .filter_map(|elem| {
                tokens
                    .get(elem.index())
                    .map(|token| (Arc::from(elem.name()), decode_for_path_params(token)))
            })
            .collect();
        let splat = route.splat(path);
        Self {
            route,
            path_params,
            splat,
        }
    }

    /// Get a named parameter by name
    ///
    /// Uses "last write wins" semantics when a pattern repeats a name, as in
    /// `/org/:id/user/:id`.
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Convert path_params to a HashMap
    /// Note: This allocates - use get_path_param() on the lookup path instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }
}
