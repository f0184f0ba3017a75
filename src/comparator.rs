//! Specificity ordering of segment tokens, routes and tree siblings.
//!
//! Three orders live here:
//!
//! - [`compare_segments`] ranks two raw tokens of route patterns: the empty
//!   token first, then literals, then named parameters, then the wildcard.
//! - [`compare_routes`] ranks whole patterns for the flat
//!   [`RegexRouter`](crate::router::RegexRouter): fewer segments first, then the
//!   first differing segment, then the raw pattern text.
//! - [`compare_siblings`] orders the children of a segment tree node. The
//!   wildcard child is tried first, then literals, then named parameters (those
//!   with a custom regex before the default matcher).

use std::cmp::Ordering;

use crate::route::helper::{strip_custom_regex, PARAM_PREFIX, PATH_ELEMENT_SEPARATOR, WILDCARD};
use crate::route::{PathElement, Route};

/// Compare two raw segment tokens by specificity.
///
/// ```
/// use std::cmp::Ordering;
/// use segrouter::comparator::compare_segments;
///
/// assert_eq!(compare_segments("", "*"), Ordering::Less);
/// assert_eq!(compare_segments("clients", ":id"), Ordering::Less);
/// assert_eq!(compare_segments(":id", "*"), Ordering::Less);
/// assert_eq!(compare_segments("a", "b"), Ordering::Less);
/// ```
#[must_use]
pub fn compare_segments(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    if a.is_empty() {
        return Ordering::Less;
    }
    if b.is_empty() {
        return Ordering::Greater;
    }
    if a == WILDCARD {
        return Ordering::Greater;
    }
    if b == WILDCARD {
        return Ordering::Less;
    }
    match (a.starts_with(PARAM_PREFIX), b.starts_with(PARAM_PREFIX)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.cmp(b),
    }
}

/// Compare two routes by specificity, most specific first.
#[must_use]
pub fn compare_routes(a: &Route, b: &Route) -> Ordering {
    let a_stripped = strip_custom_regex(a.resource_path());
    let b_stripped = strip_custom_regex(b.resource_path());
    let a_tokens = raw_tokens(&a_stripped);
    let b_tokens = raw_tokens(&b_stripped);

    a_tokens
        .len()
        .cmp(&b_tokens.len())
        .then_with(|| {
            a_tokens
                .iter()
                .zip(&b_tokens)
                .find(|(x, y)| x != y)
                .map_or(Ordering::Equal, |(x, y)| compare_segments(x, y))
        })
        .then_with(|| a.resource_path().cmp(b.resource_path()))
}

/// Tokens after the first character, trailing empties kept.
fn raw_tokens(pattern: &str) -> Vec<&str> {
    let mut chars = pattern.chars();
    chars.next();
    chars.as_str().split(PATH_ELEMENT_SEPARATOR).collect()
}

/// Order of two children of the same segment tree node.
///
/// Structurally equal elements compare equal, so a new child can be placed with
/// a binary search over its siblings.
#[must_use]
pub fn compare_siblings(a: &PathElement, b: &PathElement) -> Ordering {
    sibling_rank(a).cmp(&sibling_rank(b)).then_with(|| match (a, b) {
        (PathElement::Literal { name: x, .. }, PathElement::Literal { name: y, .. }) => x.cmp(y),
        (PathElement::Named { regex: x, .. }, PathElement::Named { regex: y, .. }) => {
            x.as_deref().cmp(&y.as_deref())
        }
        _ => Ordering::Equal,
    })
}

fn sibling_rank(elem: &PathElement) -> u8 {
    match elem {
        PathElement::Wildcard { .. } => 0,
        PathElement::Literal { .. } => 1,
        PathElement::Named { regex: Some(_), .. } => 2,
        PathElement::Named { regex: None, .. } => 3,
    }
}
