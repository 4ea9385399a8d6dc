//! Folio - plans blog pages and site manifests from markdown content.

#![allow(dead_code)]

mod cli;
mod config;
mod content;
mod logger;
mod plan;
mod site;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config),
        Commands::Plan { args } => cli::plan::run_plan(args, &config),
        Commands::Check { args } => cli::check::check_site(args, &config),
    }
}
