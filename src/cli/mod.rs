//! # CLI Module
//!
//! Command-line front end for inspecting route tables.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Resolve request paths against a route table:
//!
//! ```bash
//! segrouter match --config routes.toml /clients/42 /static/css/site.css
//! ```
//!
//! Prints one JSON object per path:
//!
//! ```json
//! {"path":"/clients/42","pattern":"/clients/:id<[0-9]+>","name":"client","params":{"id":"42"},"splat":[]}
//! ```
//!
//! A path that matches nothing prints `"pattern":null`.
//!
//! Options:
//! - `--config <FILE>` - TOML route table (required)
//! - `--strategy <tree|regex>` - matching engine, overriding the file and `SEGROUTER_STRATEGY`
//!
//! ### `tree`
//!
//! Print the segment tree built from a route table:
//!
//! ```bash
//! segrouter tree --config routes.toml
//! ```
//!
//! ## Logging
//!
//! Logging is configured from `SEGROUTER_LOG_*` variables (see
//! [`logging`](crate::logging)) and written to stderr. `--verbose` forces the
//! `debug` level.

mod commands;


pub use commands::{run, run_cli, Cli, Commands, MatchReport};
