//! Command-line interface definitions.

use crate::plan::PaginationMode;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Folio blog page planner CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: folio.toml)
    #[arg(short = 'C', long, default_value = "folio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Plan pages and write the page, site and bundler manifests
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the page plan as JSON
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: PlanArgs,
    },

    /// Validate config and content, report route and link problems
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Previous/next linking mode (overrides `build.blog.pagination`)
    #[arg(long, value_enum)]
    pub pagination: Option<PaginationMode>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// Plan command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct PlanArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Previous/next linking mode (overrides `build.blog.pagination`)
    #[arg(long, value_enum)]
    pub pagination: Option<PaginationMode>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Treat warnings as errors
    #[arg(short, long)]
    pub strict: bool,

    /// Previous/next linking mode (overrides `build.blog.pagination`)
    #[arg(long, value_enum)]
    pub pagination: Option<PaginationMode>,
}

impl Cli {
    /// Pagination override given on the command line, if any.
    pub const fn pagination(&self) -> Option<PaginationMode> {
        match &self.command {
            Commands::Build { build_args } => build_args.pagination,
            Commands::Plan { args } => args.pagination,
            Commands::Check { args } => args.pagination,
        }
    }

    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
}
