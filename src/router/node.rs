//! Nodes of the segment tree and the matchers compiled for them.

use regex::Regex;
use std::sync::Arc;

use crate::error::RouteError;
use crate::route::helper::{escape_non_custom_regex, DEFAULT_PARAM_REGEX};
use crate::route::{PathElement, Route};

/// Arena slot of the segment tree.
///
/// A node owns the matcher compiled from exactly one path element, the arena
/// indexes of its children in sibling order, and the route registered for the
/// pattern ending here, if any.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) element: PathElement,
    matcher: Regex,
    pub(crate) children: Vec<usize>,
    pub(crate) route: Option<Arc<Route>>,
}

impl Node {
    pub(crate) fn new(element: PathElement, matcher: Regex) -> Self {
        Self {
            element,
            matcher,
            children: Vec::new(),
            route: None,
        }
    }

    /// Whether this node accepts one token of a request path.
    #[inline]
    pub(crate) fn accepts(&self, token: &str) -> bool {
        self.matcher.is_match(token)
    }

    pub(crate) fn is_splat(&self) -> bool {
        self.element.is_wildcard()
    }

    pub(crate) fn pattern(&self) -> &str {
        self.matcher.as_str()
    }
}

/// Regex source anchoring one path element: `^hello$`, `^([^/]+)$`,
/// `^([0-9]+)$` or `^(.*)$`.
pub(crate) fn matcher_source(element: &PathElement) -> String {
    match element {
        PathElement::Literal { name, .. } => format!("^{}$", escape_non_custom_regex(name)),
        PathElement::Named {
            regex: Some(regex), ..
        } => format!("^({regex})$"),
        PathElement::Named { regex: None, .. } => format!("^({DEFAULT_PARAM_REGEX})$"),
        PathElement::Wildcard { .. } => "^(.*)$".to_string(),
    }
}

/// Compile the matcher of `element`, reporting failures against the pattern
/// being registered.
pub(crate) fn compile_matcher(element: &PathElement, pattern: &str) -> Result<Regex, RouteError> {
    let source = matcher_source(element);
    Regex::new(&source).map_err(|source_err| RouteError::InvalidSegmentPattern {
        pattern: pattern.to_string(),
        segment: source,
        source: source_err,
    })
}
