use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

use crate::config::{RouterConfig, Strategy};
use crate::logging::{init_logging_with_config, LogConfig};
use crate::router::{Router, TreeRouter};

/// Command-line interface for segrouter
///
/// Loads a TOML route table and either resolves request paths against it or
/// prints the segment tree it produces.
#[derive(Parser)]
#[command(name = "segrouter", version)]
#[command(about = "Segment tree request path router", long_about = None)]
pub struct Cli {
    /// Force debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve request paths and print one JSON object per path
    Match {
        /// Path to the TOML route table
        #[arg(short, long)]
        config: PathBuf,

        /// Matching strategy; overrides the file and SEGROUTER_STRATEGY
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Undecoded request paths, e.g. /clients/42
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the segment tree built from a route table
    Tree {
        /// Path to the TOML route table
        #[arg(short, long)]
        config: PathBuf,
    },
}

/// Outcome of matching one path, as printed by `segrouter match`.
#[derive(Debug, Serialize)]
pub struct MatchReport<'a> {
    pub path: &'a str,
    pub pattern: Option<String>,
    pub name: Option<&'a str>,
    pub params: BTreeMap<String, String>,
    pub splat: Vec<String>,
}

impl<'a> MatchReport<'a> {
    #[must_use]
    pub fn resolve(router: &dyn Router, config: &'a RouterConfig, path: &'a str) -> Self {
        match router.find(path) {
            Some(found) => {
                let pattern = found.route.resource_path().to_string();
                Self {
                    path,
                    name: config.name_for(&pattern),
                    params: found.path_params_map().into_iter().collect(),
                    splat: found.splat,
                    pattern: Some(pattern),
                }
            }
            None => Self {
                path,
                pattern: None,
                name: None,
                params: BTreeMap::new(),
                splat: Vec::new(),
            },
        }
    }
}

/// Parse arguments, set up logging and run the selected command on stdout.
///
/// # Errors
///
/// Propagates configuration, registration and output errors.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let mut log_config = LogConfig::from_env();
    if cli.verbose {
        log_config.log_level = "debug".to_string();
    }
    init_logging_with_config(&log_config)?;

    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}

/// Run a parsed command, writing its output to `out`.
///
/// # Errors
///
/// Propagates configuration, registration and output errors.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<()> {
    match &cli.command {
        Commands::Match {
            config,
            strategy,
            paths,
        } => {
            let table = RouterConfig::load(config)?;
            let strategy = strategy.unwrap_or_else(|| table.effective_strategy());
            debug!(?strategy, paths = paths.len(), "Matching paths");
            let router = table.build_router_with(strategy)?;
            for path in paths {
                let report = MatchReport::resolve(router.as_ref(), &table, path);
                serde_json::to_writer(&mut *out, &report)?;
                writeln!(out)?;
            }
            Ok(())
        }
        Commands::Tree { config } => {
            let table = RouterConfig::load(config)?;
            let mut tree = TreeRouter::new();
            table.populate(&mut tree)?;
            write!(out, "{}", tree.dump())?;
            Ok(())
        }
    }
}
