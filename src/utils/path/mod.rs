//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `to_slash`)
//! - [`route`]: URL utilities (`is_external_link`, `split_path_fragment`)

pub mod fs;
pub mod route;

pub use fs::{normalize_path, to_slash};
