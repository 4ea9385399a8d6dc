//! Command-line interface module.

mod args;
pub mod build;
pub mod check;
pub mod common;
pub mod plan;

pub use args::{CheckArgs, Cli, Commands, PlanArgs};
