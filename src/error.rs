//! Errors raised while building a routing table.
//!
//! Lookups never fail: a path that matches nothing is reported as `None` by
//! [`Router::route`](crate::router::Router::route). The only failures happen at
//! registration time, before a pattern becomes queryable.

use thiserror::Error;

/// Errors that can occur when constructing or registering a [`Route`](crate::Route).
#[derive(Debug, Error)]
pub enum RouteError {
    /// A route was built from an absent pattern string.
    #[error("route pattern cannot be absent")]
    MissingPattern,

    /// A segment matcher could not be compiled, usually because a custom
    /// `<...>` sub-pattern is not a valid regex.
    #[error("invalid matcher for segment '{segment}' of route '{pattern}': {source}")]
    InvalidSegmentPattern {
        /// Raw route pattern being registered
        pattern: String,
        /// Regex source that failed to compile
        segment: String,
        /// Underlying regex compilation error
        #[source]
        source: regex::Error,
    },
}
