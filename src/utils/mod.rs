//! Shared helpers: dates, pluralization, paths.

pub mod date;
pub mod path;
mod plural;

pub use plural::plural_count;
