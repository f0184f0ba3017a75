//! # Route Table Configuration
//!
//! Route tables can be described in a TOML file and turned into a ready router:
//!
//! ```toml
//! strategy = "tree"          # or "regex"; optional, default "tree"
//!
//! [[routes]]
//! pattern = "/clients/:id<[0-9]+>"
//! name = "client"            # optional label
//!
//! [[routes]]
//! pattern = "/static/*"
//! ```
//!
//! ## Environment Variables
//!
//! ### `SEGROUTER_STRATEGY`
//!
//! Overrides the file's `strategy` (`tree` or `regex`). Unknown values are
//! ignored with a warning.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::route::Route;
use crate::router::{RegexRouter, Router, TreeRouter};

/// Environment variable overriding the configured strategy.
pub const STRATEGY_ENV: &str = "SEGROUTER_STRATEGY";

/// Which matching engine to build.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Segment tree ([`TreeRouter`])
    #[default]
    Tree,
    /// Flat list of whole-pattern regexes ([`RegexRouter`])
    Regex,
}

impl Strategy {
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Some(Strategy::Tree),
            "regex" => Some(Strategy::Regex),
            _ => None,
        }
    }

    /// `value` when it names a strategy, otherwise `default`.
    #[must_use]
    pub fn resolve(value: Option<&str>, default: Strategy) -> Self {
        match value {
            Some(raw) => Self::parse(raw).unwrap_or_else(|| {
                warn!(value = %raw, "Ignoring unknown {STRATEGY_ENV}");
                default
            }),
            None => default,
        }
    }

    /// Strategy from `SEGROUTER_STRATEGY`, falling back to `default`.
    #[must_use]
    pub fn from_env_or(default: Strategy) -> Self {
        Self::resolve(env::var(STRATEGY_ENV).ok().as_deref(), default)
    }

    /// A new empty router of this kind.
    #[must_use]
    pub fn new_router(self) -> Box<dyn Router> {
        match self {
            Strategy::Tree => Box::new(TreeRouter::new()),
            Strategy::Regex => Box::new(RegexRouter::new()),
        }
    }
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    /// Route pattern; required, but kept optional here so a missing value is
    /// reported as a routing error rather than a parse error
    pub pattern: Option<String>,
    /// Optional label for the route
    #[serde(default)]
    pub name: Option<String>,
}

/// Parsed route table file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

impl RouterConfig {
    /// Load a route table from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not a valid route table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid route table {}", path.display()))?;
        info!(
            path = %path.display(),
            routes = config.routes.len(),
            strategy = ?config.strategy,
            "Loaded route table"
        );
        Ok(config)
    }

    /// Parse a route table from TOML text.
    ///
    /// # Errors
    ///
    /// Fails on TOML syntax errors or unknown strategy names.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse route table TOML")
    }

    /// The configured strategy after applying `SEGROUTER_STRATEGY`.
    #[must_use]
    pub fn effective_strategy(&self) -> Strategy {
        Strategy::from_env_or(self.strategy)
    }

    /// Build a router of the effective strategy holding every configured route.
    ///
    /// # Errors
    ///
    /// Fails on the first entry without a pattern or with an invalid custom regex.
    pub fn build_router(&self) -> Result<Box<dyn Router>> {
        self.build_router_with(self.effective_strategy())
    }

    /// Build a router of the given strategy holding every configured route.
    ///
    /// # Errors
    ///
    /// Fails on the first entry without a pattern or with an invalid custom regex.
    pub fn build_router_with(&self, strategy: Strategy) -> Result<Box<dyn Router>> {
        let mut router = strategy.new_router();
        self.populate(router.as_mut())?;
        Ok(router)
    }

    /// Register every configured route on an existing router.
    ///
    /// # Errors
    ///
    /// Fails on the first entry without a pattern or with an invalid custom regex.
    pub fn populate<R: Router + ?Sized>(&self, router: &mut R) -> Result<()> {
        for (i, entry) in self.routes.iter().enumerate() {
            let route = Route::try_new(entry.pattern.as_deref())
                .with_context(|| format!("Route entry #{} has no pattern", i + 1))?;
            router
                .add(route)
                .with_context(|| format!("Failed to register route entry #{}", i + 1))?;
        }
        Ok(())
    }

    /// Label of the first entry with exactly this pattern.
    #[must_use]
    pub fn name_for(&self, pattern: &str) -> Option<&str> {
        self.routes
            .iter()
            .find(|entry| entry.pattern.as_deref() == Some(pattern))
            .and_then(|entry| entry.name.as_deref())
    }
}
