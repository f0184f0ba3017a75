//! # segrouter
//!
//! **segrouter** matches request paths against a set of route patterns and
//! returns the single best match, extracting the named and wildcard segments it
//! captured.
//!
//! ## Overview
//!
//! Patterns look like `/literal/:name/:name<regex>/*`:
//!
//! - a literal segment matches its own text
//! - `:name` captures one segment
//! - `:name<regex>` captures one segment that satisfies `regex`
//! - `*` captures a single segment, or the whole rest of the path when it ends
//!   the pattern
//!
//! When several patterns could own a path, precedence is deterministic and does
//! not depend on registration order.
//!
//! ## Architecture
//!
//! - **[`route`]** - pattern parsing into typed [`PathElement`]s and value extraction
//! - **[`comparator`]** - specificity ordering of tokens, routes and tree siblings
//! - **[`router`]** - the [`Router`] capability, the segment tree ([`TreeRouter`]),
//!   the flat regex strategy ([`RegexRouter`]) and [`SharedRouter`]
//! - **[`decode`]** - URL decoding for routing and for extracted values
//! - **[`config`]** - TOML route tables
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `segrouter` command-line tool
//!
//! ### Lookup Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Host as Host server
//!     participant Router as TreeRouter
//!     participant Decode as decode
//!     participant Node as Tree nodes
//!
//!     Host->>Router: route("/clients/42")
//!     Router->>Decode: decode_for_routing
//!     Decode-->>Router: "/clients/42"
//!     Router->>Router: tokens ["clients", "42"]
//!     loop each token
//!         Router->>Node: first accepting child
//!         Node-->>Router: child index
//!     end
//!     Router-->>Host: Some(Arc<Route>)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use segrouter::{Route, Router, TreeRouter};
//!
//! let mut router = TreeRouter::new();
//! router.add(Route::new("/"))?;
//! router.add(Route::new("/clients/all"))?;
//! router.add(Route::new("/clients/:id<[0-9]+>"))?;
//! router.add(Route::new("/static/*"))?;
//!
//! assert_eq!(router.route("/clients/all").unwrap().resource_path(), "/clients/all");
//!
//! let found = router.find("/clients/42").unwrap();
//! assert_eq!(found.get_path_param("id"), Some("42"));
//!
//! let found = router.find("/static/css/site.css").unwrap();
//! assert_eq!(found.splat, vec!["css/site.css"]);
//!
//! assert!(router.route("/clients/bob").is_none());
//! # Ok::<(), segrouter::RouteError>(())
//! ```
//!
//! ## Decoding
//!
//! Paths are passed in undecoded. For routing, escapes are decoded except an
//! encoded separator, so `/files/a%2Fb` is still two segments. Extracted values
//! are fully decoded: the `:name` of `/files/:name` is `a/b` there.

pub mod cli;
pub mod comparator;
pub mod config;
pub mod decode;
pub mod error;
pub mod logging;
pub mod route;
pub mod router;

pub use error::RouteError;
pub use route::{PathElement, Route};
pub use router::{
    ParamVec, RegexRoute, RegexRouter, RouteMatch, Router, SharedRouter, TreeNode, TreeRouter,
};
