//! # Router Module
//!
//! Path matching and route resolution.
//!
//! ## Overview
//!
//! Every strategy implements the [`Router`] capability:
//!
//! - `add(route)` registers a [`Route`](crate::Route) pattern, failing only when a
//!   segment matcher does not compile
//! - `route(path)` returns the single best matching route for an undecoded
//!   request path, or `None`
//! - `find(path)` additionally extracts named and splat values
//!
//! ## Strategies
//!
//! - [`TreeRouter`]: a segment tree. Patterns sharing a structural prefix share
//!   nodes, and lookup walks one token at a time, so cost grows with path depth
//!   rather than with the number of routes.
//! - [`RegexRouter`]: a flat list of whole-pattern regexes sorted by specificity
//!   and scanned in order.
//!
//! [`SharedRouter`] wraps either one for lock-free lookups that run concurrently
//! with registrations.
//!
//! ## Example
//!
//! ```rust
//! use segrouter::{Route, Router, TreeRouter};
//!
//! let mut router = TreeRouter::new();
//! router.add(Route::new("/say/*/to/:name"))?;
//!
//! let found = router.find("/say/hello/to/Tim").unwrap();
//! assert_eq!(found.get_path_param("name"), Some("Tim"));
//! assert_eq!(found.splat, vec!["hello"]);
//! # Ok::<(), segrouter::RouteError>(())
//! ```

mod core;
mod node;
mod regex;
mod shared;
mod tree;
#[cfg(test)]
mod tests;

pub use self::core::{ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
pub use self::regex::{RegexRoute, RegexRouter};
pub use self::shared::SharedRouter;
pub use self::tree::{TreeNode, TreeRouter};
