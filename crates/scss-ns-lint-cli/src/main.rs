//! scss-ns-lint CLI tool.
//!
//! Usage:
//! ```bash
//! scss-ns-lint check [OPTIONS] [PATH]
//! scss-ns-lint index [--namespace-root DIR]
//! scss-ns-lint list-rules
//! scss-ns-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Linter enforcing namespaced variables and `@use` in SCSS stylesheets
#[derive(Parser)]
#[command(name = "scss-ns-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks
    Check {
        /// Path to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Rewrite files instead of reporting fixable violations
        #[arg(long)]
        fix: bool,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Directory scanned for namespace source files
        #[arg(long, env = "SCSS_NS_LINT_NAMESPACE_ROOT")]
        namespace_root: Option<PathBuf>,

        /// Abort on the first stylesheet that cannot be parsed
        #[arg(long)]
        fail_on_parse_error: bool,
    },

    /// Print the variable-to-namespace index
    Index {
        /// Directory scanned for namespace source files
        #[arg(long, env = "SCSS_NS_LINT_NAMESPACE_ROOT")]
        namespace_root: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: IndexFormat,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Source snippets rendered through miette.
    Pretty,
}

/// Output format for the namespace index.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum IndexFormat {
    /// `$variable -> namespace` lines.
    #[default]
    Text,
    /// JSON object keyed by variable.
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            fix,
            exclude,
            namespace_root,
            fail_on_parse_error,
        } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                fix,
                exclude,
                namespace_root,
                fail_on_parse_error,
            };
            commands::check::run(&path, options, &source)
        }
        Commands::Index {
            namespace_root,
            format,
        } => {
            let source = config_resolver::resolve(std::path::Path::new("."), cli.config.as_deref());
            commands::index::run(namespace_root, format, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
