use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::trace;

use super::element::PathElement;
use super::helper::{
    path_elements, path_elements_keep_trailing, strip_custom_regex, CUSTOM_REGEX_PATTERN,
    PARAM_PREFIX, PATH_ELEMENT_SEPARATOR, WILDCARD,
};
use crate::decode::decode_for_path_params;
use crate::error::RouteError;

/// A registered route pattern such as `/cntrl/actn/:id<[0-9]+>/*`.
///
/// The pattern is parsed once into an ordered list of [`PathElement`]s. Identity
/// is the raw pattern string alone: two routes built from the same string are
/// equal and hash the same.
#[derive(Debug, Clone)]
pub struct Route {
    resource_path: String,
    elements: Vec<PathElement>,
    named: Vec<usize>,
    splats: Vec<usize>,
    statics: Vec<usize>,
}

impl Route {
    /// Parse a route pattern.
    ///
    /// ```
    /// use segrouter::Route;
    ///
    /// let route = Route::new("/customer/:id<[0-9]+>/*");
    /// assert_eq!(route.path_elements().len(), 3);
    /// assert_eq!(route.named_parameter("id", "/customer/42/x"), Some("42".to_string()));
    /// ```
    pub fn new(pattern: impl Into<String>) -> Self {
        let resource_path = pattern.into();
        let elements = parse_elements(&resource_path);

        let mut named = Vec::new();
        let mut splats = Vec::new();
        let mut statics = Vec::new();
        for (pos, elem) in elements.iter().enumerate() {
            match elem {
                PathElement::Literal { .. } => statics.push(pos),
                PathElement::Named { .. } => named.push(pos),
                PathElement::Wildcard { .. } => splats.push(pos),
            }
        }

        trace!(
            pattern = %resource_path,
            elements = elements.len(),
            "Parsed route pattern"
        );

        Self {
            resource_path,
            elements,
            named,
            splats,
            statics,
        }
    }

    /// Build a route from a pattern that may be absent, e.g. an optional field
    /// of a configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::MissingPattern`] when `pattern` is `None`.
    pub fn try_new(pattern: Option<&str>) -> Result<Self, RouteError> {
        pattern.map(Self::new).ok_or(RouteError::MissingPattern)
    }

    /// The raw pattern string this route was built from.
    #[must_use]
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// All parsed elements, in pattern order.
    #[must_use]
    pub fn path_elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn named_parameter_elements(&self) -> impl Iterator<Item = &PathElement> + '_ {
        self.named.iter().map(|&pos| &self.elements[pos])
    }

    pub fn splat_parameter_elements(&self) -> impl Iterator<Item = &PathElement> + '_ {
        self.splats.iter().map(|&pos| &self.elements[pos])
    }

    pub fn static_path_elements(&self) -> impl Iterator<Item = &PathElement> + '_ {
        self.statics.iter().map(|&pos| &self.elements[pos])
    }

    /// `false` only for patterns with no segments, i.e. the root pattern `/`.
    #[must_use]
    pub fn has_path_elements(&self) -> bool {
        !self.elements.is_empty()
    }

    #[must_use]
    pub fn ends_with_path_separator(&self) -> bool {
        self.resource_path.ends_with(PATH_ELEMENT_SEPARATOR)
    }

    /// Whether the last parsed element is a wildcard, which then swallows the
    /// rest of a matched path. A literal such as `foo*` does not count.
    #[must_use]
    pub fn ends_with_splat(&self) -> bool {
        self.elements.last().is_some_and(PathElement::is_wildcard)
    }

    /// Value of the named parameter `param_name` in `path`, decoded.
    ///
    /// Assumes `path` already matched this route. Returns `None` when the route
    /// has no parameter with that name.
    #[must_use]
    pub fn named_parameter(&self, param_name: &str, path: &str) -> Option<String> {
        let tokens = path_elements(path);
        self.named_parameter_elements()
            .find(|elem| elem.name() == param_name)
            .and_then(|elem| tokens.get(elem.index()))
            .map(|token| decode_for_path_params(token))
    }

    /// Value of the splat at position `index` (0-based, among splats only).
    ///
    /// Assumes `path` already matched this route. Returns `None` when the route
    /// has fewer splats.
    #[must_use]
    pub fn splat_parameter(&self, index: usize, path: &str) -> Option<String> {
        self.splat(path).into_iter().nth(index)
    }

    /// Values of every splat in `path`, in pattern order and decoded.
    ///
    /// When the pattern ends with a splat, that last value also swallows every
    /// remaining segment of the path, separators included.
    ///
    /// ```
    /// use segrouter::Route;
    ///
    /// let route = Route::new("/say/*/to/*");
    /// assert_eq!(route.splat("/say/hello/to/John/Doe"), vec!["hello", "John/Doe"]);
    /// ```
    #[must_use]
    pub fn splat(&self, path: &str) -> Vec<String> {
        let tokens = path_elements_keep_trailing(path);
        let greedy_tail = self.ends_with_splat();
        let count = self.splats.len();

        self.splat_parameter_elements()
            .enumerate()
            .map(|(i, elem)| {
                let mut value = tokens
                    .get(elem.index())
                    .map(|token| decode_for_path_params(token))
                    .unwrap_or_default();
                if greedy_tail && i + 1 == count {
                    for token in tokens.iter().skip(elem.index() + 1) {
                        value.push_str(PATH_ELEMENT_SEPARATOR);
                        value.push_str(&decode_for_path_params(token));
                    }
                }
                value
            })
            .collect()
    }
}

/// Parse a pattern into elements in two passes: collect `<...>` sub-patterns per
/// parameter name, then classify each token of the annotation-free pattern.
fn parse_elements(resource_path: &str) -> Vec<PathElement> {
    let regex_map = custom_regex_map(resource_path);
    let stripped = strip_custom_regex(resource_path);

    let mut elements = Vec::new();
    for (index, token) in path_elements(&stripped).into_iter().enumerate() {
        if let Some(name) = token.strip_prefix(PARAM_PREFIX) {
            let regex = regex_map.get(name).map(|r| (*r).to_string());
            elements.push(PathElement::named(name, index, regex));
        } else if token == WILDCARD {
            elements.push(PathElement::wildcard(index));
        } else if !token.trim().is_empty() {
            elements.push(PathElement::literal(token, index));
        }
    }
    elements
}

/// Map parameter names to the sub-pattern annotated right after them,
/// e.g. `{"id" -> "[0-9]+"}` for `/:id<[0-9]+>`.
fn custom_regex_map(resource_path: &str) -> HashMap<&str, &str> {
    let mut map = HashMap::new();
    for annotation in CUSTOM_REGEX_PATTERN.find_iter(resource_path) {
        let before = &resource_path[..annotation.start()];
        let Some(colon) = before.rfind(PARAM_PREFIX) else {
            continue;
        };
        let name = &before[colon + PARAM_PREFIX.len()..];
        if name.contains(PATH_ELEMENT_SEPARATOR) {
            continue;
        }
        let text = annotation.as_str();
        map.insert(name, &text[1..text.len() - 1]);
    }
    map
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.resource_path == other.resource_path
    }
}

impl Eq for Route {}

impl Hash for Route {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.resource_path.hash(state);
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.resource_path)
    }
}

impl From<&str> for Route {
    fn from(pattern: &str) -> Self {
        Route::new(pattern)
    }
}

impl From<String> for Route {
    fn from(pattern: String) -> Self {
        Route::new(pattern)
    }
}
