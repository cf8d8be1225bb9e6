//! CLI entry point for the `gsearch` interactive graph tool.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use graph_search::cli::input::EditorLines;
use graph_search::config::{load_config, resolve_config_path, DriverConfig, OutputFormat};
use graph_search::types::VertexModel;
use graph_search::{GraphError, GraphResult, Session};

#[derive(Parser)]
#[command(
    name = "gsearch",
    about = "Build a small undirected graph and run depth-first and breadth-first searches"
)]
struct Cli {
    /// Path to a TOML config file (falls back to $GSEARCH_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vertex model: "implicit" (every slot is a vertex) or "explicit"
    #[arg(long)]
    model: Option<String>,

    /// Number of vertex slots
    #[arg(long)]
    capacity: Option<usize>,

    /// Output format: "text" (default) or "json"
    #[arg(long)]
    format: Option<String>,

    /// Do not print the menu or prompts
    #[arg(long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,
}

/// Merge the config file (if any) with command-line overrides.
fn build_config(cli: &Cli) -> GraphResult<DriverConfig> {
    let mut config = match resolve_config_path(cli.config.as_deref()) {
        Some(path) => load_config(&path)?,
        None => DriverConfig::default(),
    };

    if let Some(name) = &cli.model {
        config.model = VertexModel::from_name(name)
            .ok_or_else(|| GraphError::Config(format!("invalid vertex model: {name}")))?;
    }
    if let Some(capacity) = cli.capacity {
        config.capacity = capacity;
    }
    if let Some(name) = &cli.format {
        config.format = OutputFormat::from_name(name)
            .ok_or_else(|| GraphError::Config(format!("invalid output format: {name}")))?;
    }
    if cli.quiet {
        config.quiet = true;
    }

    config.validate()?;
    Ok(config)
}

fn run(cli: &Cli) -> GraphResult<()> {
    let config = build_config(cli)?;

    config.logger_builder(cli.verbose).init();
    log::debug!("starting session with {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if stdin.is_terminal() && stdout.is_terminal() && !config.quiet {
        let source = EditorLines::new()?;
        Session::with_source(&config, source, stdout.lock()).run()
    } else {
        Session::new(&config, stdin.lock(), stdout.lock()).run()
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Config(_) => 2,
            _ => 5,
        };
        process::exit(code);
    }
}
