//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module  | TOML Section | Purpose                                      |
//! |---------|--------------|----------------------------------------------|
//! | `build` | `[build]`    | Content/output paths, blog, slug, bundler    |
//! | `site`  | `[site]`     | Site info, nav links, social links           |
//! | `theme` | `[theme]`    | Color tokens, nav height, reveal defaults    |

pub mod build;
pub mod site;
pub mod theme;

pub use build::{
    BuildSectionConfig, BuildStage, BundlerConfig, NullModuleRule, SlugConfig, SlugMode,
    SlugSeparator,
};
pub use site::{SiteInfoConfig, SiteSectionConfig};
pub use theme::{RevealConfig, ThemeSectionConfig};
