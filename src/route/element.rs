//! Typed segments of a route pattern.

use std::fmt;

use super::helper::{PARAM_PREFIX, WILDCARD};

/// One segment of a parsed route pattern.
///
/// `index` is the zero-based position of the segment among *all* segments of the
/// pattern, not among segments of the same kind, so it can be used directly to
/// pick the matching token out of a request path.
///
/// Equality is structural and ignores `index` and parameter names: two literals
/// are equal when their text is, two named parameters when their custom regexes
/// are, and any two wildcards are equal. The segment tree relies on this to share
/// a node between patterns such as `/users/:id/posts` and `/users/:uid/likes`.
#[derive(Debug, Clone)]
pub enum PathElement {
    /// Fixed text that must match exactly.
    Literal {
        /// Segment text
        name: String,
        /// Position in the pattern
        index: usize,
    },
    /// A captured segment, optionally constrained by a custom regex.
    Named {
        /// Parameter name, without the `:` prefix
        name: String,
        /// Position in the pattern
        index: usize,
        /// Custom sub-pattern from a `<...>` annotation
        regex: Option<String>,
    },
    /// A "splat" capturing zero or more characters; greedy when terminal.
    Wildcard {
        /// Position in the pattern
        index: usize,
    },
}

impl PathElement {
    pub fn literal(name: impl Into<String>, index: usize) -> Self {
        PathElement::Literal {
            name: name.into(),
            index,
        }
    }

    pub fn named(name: impl Into<String>, index: usize, regex: Option<String>) -> Self {
        PathElement::Named {
            name: name.into(),
            index,
            regex,
        }
    }

    pub fn wildcard(index: usize) -> Self {
        PathElement::Wildcard { index }
    }

    /// Literal text, parameter name, or `*` for a wildcard.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            PathElement::Literal { name, .. } | PathElement::Named { name, .. } => name,
            PathElement::Wildcard { .. } => WILDCARD,
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            PathElement::Literal { index, .. }
            | PathElement::Named { index, .. }
            | PathElement::Wildcard { index } => *index,
        }
    }

    /// Custom sub-pattern of a named parameter, if one was supplied.
    #[must_use]
    pub fn regex(&self) -> Option<&str> {
        match self {
            PathElement::Named { regex, .. } => regex.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_literal(&self) -> bool {
        matches!(self, PathElement::Literal { .. })
    }

    #[must_use]
    pub fn is_named(&self) -> bool {
        matches!(self, PathElement::Named { .. })
    }

    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, PathElement::Wildcard { .. })
    }
}

impl PartialEq for PathElement {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PathElement::Literal { name: a, .. }, PathElement::Literal { name: b, .. }) => a == b,
            (PathElement::Named { regex: a, .. }, PathElement::Named { regex: b, .. }) => a == b,
            (PathElement::Wildcard { .. }, PathElement::Wildcard { .. }) => true,
            _ => false,
        }
    }
}

impl Eq for PathElement {}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::Literal { name, .. } => f.write_str(name),
            PathElement::Named {
                name,
                regex: Some(regex),
                ..
            } => write!(f, "{PARAM_PREFIX}{name}<{regex}>"),
            PathElement::Named { name, .. } => write!(f, "{PARAM_PREFIX}{name}"),
            PathElement::Wildcard { .. } => f.write_str(WILDCARD),
        }
    }
}
