//! # Route Module
//!
//! Route patterns and the typed segments they are parsed into.
//!
//! ## Pattern syntax
//!
//! ```text
//! /literal/:name/:name<regex>/*
//! ```
//!
//! - `/` separates segments
//! - `:name` captures one segment (default matcher: one or more non-`/` characters)
//! - `:name<regex>` captures one segment constrained by a custom regex
//! - `*` is a splat; as the last segment it swallows the rest of the path,
//!   separators included, and elsewhere it stands for a single segment
//!
//! A pattern ending in `/` only matches paths that end in `/` too.
//!
//! ## Example
//!
//! ```rust
//! use segrouter::route::{PathElement, Route};
//!
//! let route = Route::new("/say/*/to/:name/:times<[0-9]+>/*");
//! let kinds: Vec<_> = route
//!     .path_elements()
//!     .iter()
//!     .map(|e| (e.is_literal(), e.is_named(), e.is_wildcard()))
//!     .collect();
//! assert_eq!(kinds.len(), 6);
//! assert_eq!(route.named_parameter("times", "/say/hi/to/Tim/3/x"), Some("3".into()));
//! ```

mod core;
mod element;
pub mod helper;

pub use self::core::Route;
pub use self::element::PathElement;
