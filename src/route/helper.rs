//! Pattern vocabulary and tokenizing helpers shared by routes and routers.

use once_cell::sync::Lazy;
use regex::Regex;

/// Segment separator of both patterns and request paths.
pub const PATH_ELEMENT_SEPARATOR: &str = "/";

/// Prefix introducing a named parameter (`:id`).
pub const PARAM_PREFIX: &str = ":";

/// Token standing for a wildcard ("splat") segment.
pub const WILDCARD: &str = "*";

/// Default matcher of a named parameter without a custom sub-pattern.
pub const DEFAULT_PARAM_REGEX: &str = "[^/]+";

/// Inline custom sub-pattern annotation, e.g. the `<[0-9]+>` of `:id<[0-9]+>`.
pub(crate) static CUSTOM_REGEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"<[^>]+>").expect("custom regex annotation pattern is valid")
});

/// Split a path into its segments, ignoring one leading separator and dropping
/// trailing empty segments.
///
/// `"/"` yields a single empty segment.
///
/// ```
/// use segrouter::route::helper::path_elements;
///
/// assert_eq!(path_elements("/"), vec![""]);
/// assert_eq!(path_elements("/clients/:id"), vec!["clients", ":id"]);
/// assert_eq!(path_elements("clients/:id/"), vec!["clients", ":id"]);
/// ```
#[must_use]
pub fn path_elements(path: &str) -> Vec<&str> {
    let mut elements = path_elements_keep_trailing(path);
    if elements.len() > 1 {
        while elements.last().is_some_and(|e| e.is_empty()) {
            elements.pop();
        }
    }
    elements
}

/// Split a path into its segments, ignoring one leading separator but keeping
/// trailing empty segments, so `"/hello/"` yields `["hello", ""]`.
#[must_use]
pub fn path_elements_keep_trailing(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix(PATH_ELEMENT_SEPARATOR).unwrap_or(path);
    trimmed.split(PATH_ELEMENT_SEPARATOR).collect()
}

/// Escape regex metacharacters everywhere except inside `<...>` annotations.
///
/// ```
/// use segrouter::route::helper::escape_non_custom_regex;
///
/// assert_eq!(
///     escape_non_custom_regex("/a+b/:id<[0-9]+>"),
///     r"/a\+b/:id<[0-9]+>"
/// );
/// ```
#[must_use]
pub fn escape_non_custom_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut last = 0;
    for annotation in CUSTOM_REGEX_PATTERN.find_iter(pattern) {
        out.push_str(&regex::escape(&pattern[last..annotation.start()]));
        out.push_str(annotation.as_str());
        last = annotation.end();
    }
    out.push_str(&regex::escape(&pattern[last..]));
    out
}

/// Remove every `<...>` annotation from a pattern.
pub(crate) fn strip_custom_regex(pattern: &str) -> String {
    CUSTOM_REGEX_PATTERN.replace_all(pattern, "").into_owned()
}
